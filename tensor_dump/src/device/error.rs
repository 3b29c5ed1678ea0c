use super::Place;

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Allocation on {0} is not host addressable")]
    NotHostAddressable(Place),
    #[error("Allocation on {0} is not owned by this context")]
    ForeignAllocation(Place),
    #[error(
        "Copy of {requested} bytes at offset {offset} exceeds allocation of {length} bytes"
    )]
    OutOfBounds {
        offset: usize,
        requested: usize,
        length: usize,
    },
}
