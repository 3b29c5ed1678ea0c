use std::fmt;

#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum DataLayout {
    Any,
    #[default]
    NCHW,
    NHWC,
    NCDHW,
    NDHWC,
    OneDNN,
    SparseCoo,
    SparseCsr,
    Strided,
}

impl DataLayout {
    pub const fn name(&self) -> &'static str {
        match self {
            DataLayout::Any => "Undefined(AnyLayout)",
            DataLayout::NCHW => "NCHW",
            DataLayout::NHWC => "NHWC",
            DataLayout::NCDHW => "NCDHW",
            DataLayout::NDHWC => "NDHWC",
            DataLayout::OneDNN => "ONEDNN",
            DataLayout::SparseCoo => "SPARSE_COO",
            DataLayout::SparseCsr => "SPARSE_CSR",
            DataLayout::Strided => "STRIDED",
        }
    }
}

impl fmt::Display for DataLayout {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
