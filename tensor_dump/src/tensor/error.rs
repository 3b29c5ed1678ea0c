use thiserror::Error;

use crate::{DataType, device::Place};

#[derive(Error, Debug)]
pub enum ArrayConversionError {
    #[error("Invalid data type, expected {expected:?}, actual {actual:?}")]
    InvalidDataType {
        expected: DataType,
        actual: DataType,
    },
    #[error("Tensor is not initialized")]
    Uninitialized,
    #[error("Tensor on {0} is not host resident")]
    NotHostResident(Place),
    #[error("Tensor bytes are not aligned for {0:?}")]
    Misaligned(DataType),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
