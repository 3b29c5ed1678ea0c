use std::path::{Path, PathBuf};

/// Identifies one tensor argument of one operation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Distinguishes the invocation point, e.g. `conv2d_3`.
    pub unique_id: &'a str,
    pub op_name: &'a str,
    /// Argument category such as `input` or `output`.
    pub arg_role: &'a str,
    pub arg_name: &'a str,
}

impl<'a> CallSite<'a> {
    pub fn new(
        unique_id: &'a str,
        op_name: &'a str,
        arg_role: &'a str,
        arg_name: &'a str,
    ) -> Self {
        Self {
            unique_id,
            op_name,
            arg_role,
            arg_name,
        }
    }

    /// `<root>/<unique_id>/<arg_role>`
    pub fn directory(
        &self,
        root: &Path,
    ) -> PathBuf {
        root.join(self.unique_id).join(self.arg_role)
    }

    /// `<arg_name>_<address>`, shared by the descriptor and data files.
    pub fn file_stem(
        &self,
        address: &str,
    ) -> String {
        format!("{}_{}", self.arg_name, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let site = CallSite::new("conv2d_0", "conv2d", "input", "x");
        assert_eq!(
            site.directory(Path::new("tensor_dump")),
            PathBuf::from("tensor_dump/conv2d_0/input")
        );
        assert_eq!(site.file_stem("140234"), "x_140234");
    }
}
