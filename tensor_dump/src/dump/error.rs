use std::{io, path::PathBuf};

use crate::{
    device::{DeviceError, Place},
    tensor::ArrayConversionError,
};

/// Failures that abort a dump request. The calling operation is expected to
/// stop: a partially written dump is worse than none.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Cannot create folder {path:?}")]
    CreateDirectory {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Cannot open {path:?} to write")]
    OpenFile {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Cannot write {path:?}")]
    WriteFile {
        path: PathBuf,
        source: io::Error,
    },
    #[error("No device context registered for {0}")]
    MissingDeviceContext(Place),
    #[error("Failed to copy tensor from {place} to host")]
    DeviceCopy {
        place: Place,
        source: DeviceError,
    },
    #[error("Failed to read host tensor")]
    HostRead(#[from] ArrayConversionError),
}
