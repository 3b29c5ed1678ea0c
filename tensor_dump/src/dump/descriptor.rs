use std::fmt;

use crate::tensor::DenseTensor;

/// One-line summary of a dumped tensor, written next to its data.
pub struct TensorDesc<'a> {
    address: &'a str,
    tensor: &'a DenseTensor,
}

impl<'a> TensorDesc<'a> {
    pub fn new(
        address: &'a str,
        tensor: &'a DenseTensor,
    ) -> Self {
        Self {
            address,
            tensor,
        }
    }

    /// Full descriptor file content, newline terminated.
    pub fn to_file_contents(&self) -> String {
        format!("TensorDesc = {{ {self} }}\n")
    }
}

struct Dims<'a>(&'a [usize]);

impl fmt::Display for Dims<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (index, dim) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{dim}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TensorDesc<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let tensor = self.tensor;
        write!(f, "Name: {}", self.address)?;
        match tensor.place() {
            Some(place) => write!(
                f,
                ", initialized: 1, place: {}, dtype: {}, format: {}, dims: [{}], capacity: <{}>",
                place,
                tensor.data_type(),
                tensor.layout(),
                Dims(tensor.shape()),
                tensor.capacity()
            ),
            None => write!(
                f,
                ", initialized: 0, place: Unknown, dtype: {}, format: {}, dims: [{}]",
                tensor.data_type(),
                tensor.layout(),
                Dims(tensor.shape())
            ),
        }
    }
}
