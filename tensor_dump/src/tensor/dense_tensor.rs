use std::sync::Arc;

use ndarray::{ArrayView, IxDyn};

use super::{Allocation, ArrayConversionError, DataLayout, HostAllocation};
use crate::{
    ArrayElement, DataType,
    device::{DeviceContext, DeviceError, Place},
};

/// Number of bytes needed by a contiguous tensor of `shape`.
pub fn size_for_shape(
    shape: &[usize],
    data_type: DataType,
) -> usize {
    shape.iter().product::<usize>() * data_type.size_in_bytes()
}

/// Contiguous tensor over a (possibly shared) allocation.
#[derive(Debug, Clone)]
pub struct DenseTensor {
    allocation: Option<Arc<dyn Allocation>>,
    offset: usize,
    shape: Box<[usize]>,
    data_type: DataType,
    layout: DataLayout,
}

impl DenseTensor {
    // Constructors
    pub fn uninitialized(
        shape: &[usize],
        data_type: DataType,
    ) -> Self {
        Self {
            allocation: None,
            offset: 0,
            shape: shape.into(),
            data_type,
            layout: DataLayout::default(),
        }
    }

    pub fn from_parts(
        allocation: Arc<dyn Allocation>,
        offset: usize,
        shape: &[usize],
        data_type: DataType,
    ) -> Self {
        let required_bytes = size_for_shape(shape, data_type);
        assert!(
            offset + required_bytes <= allocation.length(),
            "Shape {:?} with data type {:?} at offset {} requires {} bytes total, but allocation length is {} bytes",
            shape,
            data_type,
            offset,
            offset + required_bytes,
            allocation.length()
        );
        Self {
            allocation: Some(allocation),
            offset,
            shape: shape.into(),
            data_type,
            layout: DataLayout::default(),
        }
    }

    /// Host tensor holding a copy of `data`.
    pub fn from_slice<T: ArrayElement>(
        shape: &[usize],
        data: &[T],
    ) -> Self {
        Self::from_parts(
            Arc::new(HostAllocation::from_slice(data)),
            0,
            shape,
            T::data_type(),
        )
    }

    pub fn with_layout(
        mut self,
        layout: DataLayout,
    ) -> Self {
        self.layout = layout;
        self
    }

    // Getters
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn layout(&self) -> DataLayout {
        self.layout
    }

    /// `None` until the tensor has memory.
    pub fn place(&self) -> Option<&Place> {
        self.allocation.as_ref().map(|allocation| allocation.place())
    }

    pub fn is_initialized(&self) -> bool {
        self.allocation.is_some()
    }

    /// Bytes held by the underlying allocation, zero when uninitialized.
    pub fn capacity(&self) -> usize {
        self.allocation.as_ref().map_or(0, |allocation| allocation.length())
    }

    // Utility
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn size(&self) -> usize {
        size_for_shape(&self.shape, self.data_type)
    }

    pub fn as_bytes(&self) -> Result<&[u8], ArrayConversionError> {
        let allocation =
            self.allocation.as_ref().ok_or(ArrayConversionError::Uninitialized)?;
        let bytes = allocation.host_bytes().ok_or_else(|| {
            ArrayConversionError::NotHostResident(allocation.place().clone())
        })?;
        Ok(&bytes[self.offset..self.offset + self.size()])
    }

    pub fn as_slice<T: ArrayElement>(&self) -> Result<&[T], ArrayConversionError> {
        if T::data_type() != self.data_type {
            return Err(ArrayConversionError::InvalidDataType {
                expected: T::data_type(),
                actual: self.data_type,
            });
        }
        bytemuck::try_cast_slice(self.as_bytes()?)
            .map_err(|_| ArrayConversionError::Misaligned(self.data_type))
    }

    pub fn as_view<T: ArrayElement>(
        &self
    ) -> Result<ArrayView<'_, T, IxDyn>, ArrayConversionError> {
        Ok(ArrayView::from_shape(IxDyn(self.shape()), self.as_slice()?)?)
    }

    /// Copies the tensor into a fresh host allocation through `context`,
    /// blocking until the copy is complete.
    pub fn to_host(
        &self,
        context: &dyn DeviceContext,
    ) -> Result<DenseTensor, DeviceError> {
        let Some(allocation) = self.allocation.as_ref() else {
            return Ok(self.clone());
        };
        let mut host = HostAllocation::zeroed(self.size());
        context.copy_to_host(allocation.as_ref(), self.offset, host.as_bytes_mut())?;
        Ok(Self::from_parts(Arc::new(host), 0, &self.shape, self.data_type)
            .with_layout(self.layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::HostContext;

    #[test]
    fn test_scalar_has_one_element() {
        let tensor = DenseTensor::from_slice::<f64>(&[], &[3.14]);
        assert_eq!(tensor.num_elements(), 1);
        assert_eq!(tensor.size(), 8);
        assert_eq!(tensor.as_slice::<f64>().unwrap(), &[3.14]);
    }

    #[test]
    fn test_capacity_and_placement() {
        let tensor = DenseTensor::from_slice(&[2, 2], &[1.0f32, 2.0, 3.0, 4.0]);
        assert!(tensor.is_initialized());
        assert_eq!(tensor.capacity(), 16);
        assert_eq!(tensor.place(), Some(&Place::Cpu));

        let empty = DenseTensor::uninitialized(&[2, 2], DataType::F32);
        assert!(!empty.is_initialized());
        assert_eq!(empty.capacity(), 0);
        assert_eq!(empty.place(), None);
        assert!(matches!(
            empty.as_bytes(),
            Err(ArrayConversionError::Uninitialized)
        ));
    }

    #[test]
    fn test_view_at_offset() {
        let allocation: Arc<dyn Allocation> =
            Arc::new(HostAllocation::from_slice(&[0.0f32, 1.0, 2.0, 3.0, 4.0]));
        let tensor = DenseTensor::from_parts(allocation, 4, &[2, 2], DataType::F32);
        let view = tensor.as_view::<f32>().unwrap();
        assert_eq!(view[[1, 0]], 3.0);
        assert_eq!(tensor.capacity(), 20);
    }

    #[test]
    fn test_wrong_element_type_is_rejected() {
        let tensor = DenseTensor::from_slice(&[2], &[1i64, 2]);
        assert!(matches!(
            tensor.as_slice::<f64>(),
            Err(ArrayConversionError::InvalidDataType {
                expected: DataType::F64,
                actual: DataType::I64,
            })
        ));
    }

    #[test]
    fn test_to_host_keeps_metadata() {
        let tensor = DenseTensor::from_slice(&[3], &[1.0f32, 2.0, 3.0])
            .with_layout(DataLayout::NHWC);
        let copy = tensor.to_host(&HostContext).unwrap();
        assert_eq!(copy.shape(), &[3]);
        assert_eq!(copy.layout(), DataLayout::NHWC);
        assert_eq!(copy.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
    }
}
