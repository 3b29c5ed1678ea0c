use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DumpEnvVar, dump::AllowList};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Comma-separated operation names, or `all`. `None` dumps nothing.
    #[serde(default)]
    pub op_list: Option<String>,
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(DumpConfig::DEFAULT_ROOT)
}

impl DumpConfig {
    pub const DEFAULT_ROOT: &'static str = "tensor_dump";

    pub fn new(
        op_list: Option<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            op_list,
            root: root.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            op_list: DumpEnvVar::OpList.value(),
            root: DumpEnvVar::Root.value().map_or_else(default_root, PathBuf::from),
        }
    }

    pub fn allow_list(&self) -> AllowList {
        AllowList::from_config(self.op_list.as_deref())
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            op_list: None,
            root: default_root(),
        }
    }
}
