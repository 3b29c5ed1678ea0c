#[derive(Copy, Clone, Debug)]
pub enum DumpEnvVar {
    /// Comma-separated operation names, or `all`.
    OpList,
    /// Directory the dump tree is written under.
    Root,
}

impl DumpEnvVar {
    pub fn key(&self) -> &'static str {
        match self {
            DumpEnvVar::OpList => "TENSOR_DUMP_OP_LIST",
            DumpEnvVar::Root => "TENSOR_DUMP_ROOT",
        }
    }

    /// Returns `None` when the variable is unset or not valid unicode.
    pub fn value(&self) -> Option<String> {
        std::env::var(self.key()).ok()
    }
}
