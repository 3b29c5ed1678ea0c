mod allocation;
mod dense_tensor;
mod error;
mod layout;
mod selected_rows;
mod tensor;

pub use allocation::{Allocation, HostAllocation};
pub use dense_tensor::{DenseTensor, size_for_shape};
pub use error::ArrayConversionError;
pub use layout::DataLayout;
pub use selected_rows::SelectedRows;
pub use tensor::{Tensor, TensorImpl};
