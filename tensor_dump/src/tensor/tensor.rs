use std::sync::Arc;

use super::{DenseTensor, SelectedRows};

/// Storage behind a [`Tensor`] handle.
#[derive(Debug, Clone)]
pub enum TensorImpl {
    Dense(DenseTensor),
    SelectedRows(SelectedRows),
    /// Any representation the dump path does not understand (sparse COO/CSR,
    /// string tensors, ...).
    Other {
        kind: String,
        initialized: bool,
    },
}

impl TensorImpl {
    pub fn is_initialized(&self) -> bool {
        match self {
            TensorImpl::Dense(dense) => dense.is_initialized(),
            TensorImpl::SelectedRows(selected_rows) => selected_rows.is_initialized(),
            TensorImpl::Other {
                initialized,
                ..
            } => *initialized,
        }
    }
}

/// Named handle shared by the runtime. Cloning a tensor shares its storage.
#[derive(Debug, Clone)]
pub struct Tensor {
    name: String,
    inner: Option<Arc<TensorImpl>>,
}

impl Tensor {
    pub fn new(
        name: impl Into<String>,
        inner: TensorImpl,
    ) -> Self {
        Self {
            name: name.into(),
            inner: Some(Arc::new(inner)),
        }
    }

    /// A handle without storage.
    pub fn undefined(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: None,
        }
    }

    pub fn dense(
        name: impl Into<String>,
        dense: DenseTensor,
    ) -> Self {
        Self::new(name, TensorImpl::Dense(dense))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> Option<&TensorImpl> {
        self.inner.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_initialized())
    }

    /// Address of the shared storage, zero for undefined handles. Stable for
    /// the lifetime of the storage and shared by every clone of the handle.
    pub fn address(&self) -> usize {
        self.inner
            .as_ref()
            .map_or(0, |inner| Arc::as_ptr(inner) as usize)
    }
}
