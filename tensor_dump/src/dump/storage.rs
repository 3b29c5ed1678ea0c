use super::SkipReason;
use crate::tensor::{DenseTensor, Tensor, TensorImpl};

#[derive(Debug)]
pub enum Resolution<'t> {
    Dense(&'t DenseTensor),
    Skipped(SkipReason),
}

/// Picks the dense buffer holding `tensor`'s values: the tensor itself, or the
/// value tensor of selected rows.
pub fn resolve_storage(tensor: &Tensor) -> Resolution<'_> {
    let Some(inner) = tensor.inner().filter(|inner| inner.is_initialized()) else {
        return Resolution::Skipped(SkipReason::Uninitialized);
    };
    match inner {
        TensorImpl::Dense(dense) => Resolution::Dense(dense),
        TensorImpl::SelectedRows(selected_rows) => Resolution::Dense(selected_rows.value()),
        TensorImpl::Other {
            kind,
            ..
        } => {
            tracing::trace!(
                tensor = tensor.name(),
                kind = kind.as_str(),
                "Only dense tensors or selected rows are dumped, skipping"
            );
            Resolution::Skipped(SkipReason::UnsupportedStorage)
        },
    }
}
