use std::{any::Any, fmt};

use bytemuck::Pod;

use crate::device::Place;

static HOST_PLACE: Place = Place::Cpu;

/// A block of memory backing one or more tensors.
pub trait Allocation: Send + Sync + fmt::Debug {
    fn place(&self) -> &Place;

    /// Length in bytes.
    fn length(&self) -> usize;

    /// The bytes of the allocation when they are directly addressable by the
    /// host, `None` for device memory.
    fn host_bytes(&self) -> Option<&[u8]>;

    /// Lets a device context recover its own allocation type.
    fn as_any(&self) -> &dyn Any;
}

/// Host memory, aligned for every supported element type.
#[derive(Debug, Clone)]
pub struct HostAllocation {
    words: Box<[u64]>,
    length: usize,
}

impl HostAllocation {
    pub fn zeroed(length: usize) -> Self {
        Self {
            words: vec![0u64; length.div_ceil(size_of::<u64>())].into_boxed_slice(),
            length,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut allocation = Self::zeroed(bytes.len());
        allocation.as_bytes_mut().copy_from_slice(bytes);
        allocation
    }

    pub fn from_slice<T: Pod>(data: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice(data))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.length]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..self.length]
    }
}

impl Allocation for HostAllocation {
    fn place(&self) -> &Place {
        &HOST_PLACE
    }

    fn length(&self) -> usize {
        self.length
    }

    fn host_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
