use super::DenseTensor;

/// Sparse tensor keeping only some rows of a `[height, ...]` tensor. `value`
/// holds the kept rows, `rows` their indices in the full tensor.
#[derive(Debug, Clone)]
pub struct SelectedRows {
    rows: Vec<i64>,
    height: i64,
    value: DenseTensor,
}

impl SelectedRows {
    pub fn new(
        rows: Vec<i64>,
        height: i64,
        value: DenseTensor,
    ) -> Self {
        Self {
            rows,
            height,
            value,
        }
    }

    pub fn rows(&self) -> &[i64] {
        &self.rows
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn value(&self) -> &DenseTensor {
        &self.value
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_initialized()
    }
}
