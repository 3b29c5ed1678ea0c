use num_complex::{Complex32, Complex64};

use crate::{
    ArrayElement, DataType,
    tensor::{ArrayConversionError, DenseTensor},
};

/// Host copy of a tensor's elements, one variant per dumpable element type.
#[derive(Debug, Clone, PartialEq)]
pub enum HostData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    Complex64(Vec<Complex32>),
    Complex128(Vec<Complex64>),
}

/// Extraction routine for one dumpable element type.
#[derive(Clone, Copy)]
pub struct Extractor {
    data_type: DataType,
    extract: fn(&[u8]) -> HostData,
}

impl Extractor {
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Copies the elements of a host-resident tensor of this element type.
    pub fn extract(
        &self,
        tensor: &DenseTensor,
    ) -> Result<HostData, ArrayConversionError> {
        if tensor.data_type() != self.data_type {
            return Err(ArrayConversionError::InvalidDataType {
                expected: self.data_type,
                actual: tensor.data_type(),
            });
        }
        Ok((self.extract)(tensor.as_bytes()?))
    }
}

fn copy_elements<T: ArrayElement>(bytes: &[u8]) -> Vec<T> {
    let mut elements = vec![T::zeroed(); bytes.len() / size_of::<T>()];
    bytemuck::cast_slice_mut::<T, u8>(&mut elements).copy_from_slice(bytes);
    elements
}

impl HostData {
    pub fn supports(data_type: DataType) -> bool {
        Self::extractor(data_type).is_some()
    }

    /// Extraction routine for `data_type`, `None` for element types that are
    /// not dumped. Half-precision kinds are not dumped.
    pub fn extractor(data_type: DataType) -> Option<Extractor> {
        let extract: fn(&[u8]) -> HostData = match data_type {
            DataType::F32 => |bytes| HostData::F32(copy_elements(bytes)),
            DataType::F64 => |bytes| HostData::F64(copy_elements(bytes)),
            DataType::Complex64 => |bytes| HostData::Complex64(copy_elements(bytes)),
            DataType::Complex128 => |bytes| HostData::Complex128(copy_elements(bytes)),
            DataType::Bool
            | DataType::I8
            | DataType::U8
            | DataType::I16
            | DataType::U16
            | DataType::I32
            | DataType::U32
            | DataType::I64
            | DataType::U64
            | DataType::F16
            | DataType::BF16 => return None,
        };
        Some(Extractor {
            data_type,
            extract,
        })
    }

    /// Copies the elements of a host-resident tensor. `Ok(None)` for element
    /// types that are not dumped.
    pub fn extract(tensor: &DenseTensor) -> Result<Option<HostData>, ArrayConversionError> {
        Self::extractor(tensor.data_type())
            .map(|extractor| extractor.extract(tensor))
            .transpose()
    }

    pub fn data_type(&self) -> DataType {
        match self {
            HostData::F32(_) => DataType::F32,
            HostData::F64(_) => DataType::F64,
            HostData::Complex64(_) => DataType::Complex64,
            HostData::Complex128(_) => DataType::Complex128,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HostData::F32(data) => data.len(),
            HostData::F64(data) => data.len(),
            HostData::Complex64(data) => data.len(),
            HostData::Complex128(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Native-endian bytes of the elements.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HostData::F32(data) => bytemuck::cast_slice(data),
            HostData::F64(data) => bytemuck::cast_slice(data),
            HostData::Complex64(data) => bytemuck::cast_slice(data),
            HostData::Complex128(data) => bytemuck::cast_slice(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use half::{bf16, f16};

    use super::*;

    #[test]
    fn test_float_kinds_are_supported() {
        for data_type in [
            DataType::F32,
            DataType::F64,
            DataType::Complex64,
            DataType::Complex128,
        ] {
            assert!(HostData::supports(data_type), "{data_type} should be dumped");
        }
    }

    #[test]
    fn test_integer_bool_and_half_kinds_are_not_supported() {
        for data_type in [
            DataType::Bool,
            DataType::I8,
            DataType::U8,
            DataType::I16,
            DataType::U16,
            DataType::I32,
            DataType::U32,
            DataType::I64,
            DataType::U64,
            DataType::F16,
            DataType::BF16,
        ] {
            assert!(!HostData::supports(data_type), "{data_type} should not be dumped");
        }

        let tensor = DenseTensor::from_slice(&[4], &[1i64, 2, 3, 4]);
        assert!(HostData::extract(&tensor).unwrap().is_none());
        let tensor = DenseTensor::from_slice(&[2], &[f16::ONE, f16::ZERO]);
        assert!(HostData::extract(&tensor).unwrap().is_none());
        let tensor = DenseTensor::from_slice(&[2], &[bf16::ONE, bf16::ZERO]);
        assert!(HostData::extract(&tensor).unwrap().is_none());
    }

    #[test]
    fn test_extract_complex() {
        let values = [Complex32::new(1.0, -1.0), Complex32::new(0.5, 2.0)];
        let tensor = DenseTensor::from_slice(&[2], &values);
        let data = HostData::extract(&tensor).unwrap().unwrap();
        assert_eq!(data, HostData::Complex64(values.to_vec()));
        assert_eq!(data.data_type(), DataType::Complex64);
        assert_eq!(data.as_bytes().len(), 16);
    }

    #[test]
    fn test_extractor_checks_element_type() {
        let extractor = HostData::extractor(DataType::F64).unwrap();
        assert_eq!(extractor.data_type(), DataType::F64);

        let values = [0.5f64, -1.25, 8.0];
        let data = extractor.extract(&DenseTensor::from_slice(&[3], &values)).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.as_bytes(), bytemuck::cast_slice::<f64, u8>(&values));

        let other = DenseTensor::from_slice(&[2], &[1.0f32, 2.0]);
        assert!(matches!(
            extractor.extract(&other),
            Err(ArrayConversionError::InvalidDataType {
                expected: DataType::F64,
                actual: DataType::F32,
            })
        ));
    }
}
