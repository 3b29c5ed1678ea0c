use std::path::PathBuf;

use crate::DataType;

/// Files produced for one tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpArtifact {
    pub descriptor_path: PathBuf,
    pub data_path: PathBuf,
}

/// Why a tensor that passed the allow list was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Uninitialized,
    /// Neither a dense tensor nor selected rows.
    UnsupportedStorage,
    /// Only floating point and complex tensors are dumped.
    UnsupportedDataType(DataType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    Written(DumpArtifact),
    Skipped(SkipReason),
}

impl DumpOutcome {
    pub fn artifact(&self) -> Option<&DumpArtifact> {
        match self {
            DumpOutcome::Written(artifact) => Some(artifact),
            DumpOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            DumpOutcome::Written(_) => None,
            DumpOutcome::Skipped(reason) => Some(*reason),
        }
    }
}

impl From<SkipReason> for DumpOutcome {
    fn from(reason: SkipReason) -> Self {
        DumpOutcome::Skipped(reason)
    }
}

impl SkipReason {
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            SkipReason::UnsupportedDataType(data_type) => Some(*data_type),
            _ => None,
        }
    }
}
