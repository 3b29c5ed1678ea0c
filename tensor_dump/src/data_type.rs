use std::fmt;

use bytemuck::Pod;
use half::{bf16, f16};
use num_complex::{Complex32, Complex64};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Bool,
    // Integers
    #[serde(rename = "int8")]
    I8,
    #[serde(rename = "uint8")]
    U8,
    #[serde(rename = "int16")]
    I16,
    #[serde(rename = "uint16")]
    U16,
    #[serde(rename = "int32")]
    I32,
    #[serde(rename = "uint32")]
    U32,
    #[serde(rename = "int64")]
    I64,
    #[serde(rename = "uint64")]
    U64,
    // Floating point
    #[serde(rename = "float16")]
    F16,
    #[serde(rename = "bfloat16")]
    BF16,
    #[serde(rename = "float32")]
    F32,
    #[serde(rename = "float64")]
    F64,
    // Complex, pairs of floats
    Complex64,
    Complex128,
}

impl DataType {
    pub const fn size_in_bits(&self) -> usize {
        match self {
            DataType::Bool | DataType::I8 | DataType::U8 => 8,
            DataType::I16 | DataType::U16 => 16,
            DataType::F16 | DataType::BF16 => 16,
            DataType::I32 | DataType::U32 | DataType::F32 => 32,
            DataType::I64 | DataType::U64 | DataType::F64 => 64,
            DataType::Complex64 => 64,
            DataType::Complex128 => 128,
        }
    }

    pub const fn size_in_bytes(&self) -> usize {
        self.size_in_bits().div_ceil(8)
    }

    /// Name used in tensor descriptors, e.g. `float32`.
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::I8 => "int8",
            DataType::U8 => "uint8",
            DataType::I16 => "int16",
            DataType::U16 => "uint16",
            DataType::I32 => "int32",
            DataType::U32 => "uint32",
            DataType::I64 => "int64",
            DataType::U64 => "uint64",
            DataType::F16 => "float16",
            DataType::BF16 => "bfloat16",
            DataType::F32 => "float32",
            DataType::F64 => "float64",
            DataType::Complex64 => "complex64",
            DataType::Complex128 => "complex128",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait ArrayElement: Pod + fmt::Debug {
    fn data_type() -> DataType;
}

macro_rules! impl_array_element {
    ($($type:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ArrayElement for $type {
                fn data_type() -> DataType {
                    DataType::$variant
                }
            }
        )+
    };
}

impl_array_element! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f16 => F16,
    bf16 => BF16,
    f32 => F32,
    f64 => F64,
    Complex32 => Complex64,
    Complex64 => Complex128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_names_match_serde() {
        for data_type in [
            DataType::Bool,
            DataType::I64,
            DataType::U16,
            DataType::F16,
            DataType::BF16,
            DataType::F32,
            DataType::F64,
            DataType::Complex64,
            DataType::Complex128,
        ] {
            let serialized = serde_json::to_string(&data_type).unwrap();
            assert_eq!(serialized, format!("\"{}\"", data_type.name()));
        }
    }

    #[test]
    fn test_element_sizes() {
        assert_eq!(DataType::Bool.size_in_bytes(), 1);
        assert_eq!(DataType::BF16.size_in_bytes(), 2);
        assert_eq!(DataType::F32.size_in_bytes(), std::mem::size_of::<f32>());
        assert_eq!(
            DataType::Complex64.size_in_bytes(),
            std::mem::size_of::<Complex32>()
        );
        assert_eq!(
            DataType::Complex128.size_in_bytes(),
            std::mem::size_of::<Complex64>()
        );
    }
}
