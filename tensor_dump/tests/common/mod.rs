#![allow(dead_code)]
use std::{
    any::Any,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use tensor_dump::{
    ArrayElement, DumpConfig, TensorDumper,
    device::{DeviceContext, DeviceContextPool, DeviceError, Place},
    tensor::{Allocation, DenseTensor},
};
use walkdir::WalkDir;

pub const DEVICE_TYPE: &str = "sim";

/// Accelerator memory: its bytes can only be reached through
/// [`SimulatedDeviceContext`].
#[derive(Debug)]
pub struct DeviceAllocation {
    place: Place,
    bytes: Box<[u8]>,
}

impl Allocation for DeviceAllocation {
    fn place(&self) -> &Place {
        &self.place
    }

    fn length(&self) -> usize {
        self.bytes.len()
    }

    fn host_bytes(&self) -> Option<&[u8]> {
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct SimulatedDeviceContext {
    device_id: usize,
    copies: AtomicUsize,
}

impl SimulatedDeviceContext {
    pub fn new(device_id: usize) -> Arc<Self> {
        Arc::new(Self {
            device_id,
            copies: AtomicUsize::new(0),
        })
    }

    pub fn copies(&self) -> usize {
        self.copies.load(Ordering::SeqCst)
    }

    pub fn allocate<T: ArrayElement>(
        &self,
        data: &[T],
    ) -> Arc<dyn Allocation> {
        Arc::new(DeviceAllocation {
            place: self.place(),
            bytes: bytemuck::cast_slice::<T, u8>(data).into(),
        })
    }

    pub fn tensor<T: ArrayElement>(
        &self,
        shape: &[usize],
        data: &[T],
    ) -> DenseTensor {
        DenseTensor::from_parts(self.allocate(data), 0, shape, T::data_type())
    }
}

impl DeviceContext for SimulatedDeviceContext {
    fn place(&self) -> Place {
        Place::device(DEVICE_TYPE, self.device_id)
    }

    fn copy_to_host(
        &self,
        src: &dyn Allocation,
        offset: usize,
        dst: &mut [u8],
    ) -> Result<(), DeviceError> {
        let allocation = src
            .as_any()
            .downcast_ref::<DeviceAllocation>()
            .filter(|allocation| allocation.place == self.place())
            .ok_or_else(|| DeviceError::ForeignAllocation(src.place().clone()))?;
        let end = offset + dst.len();
        if end > allocation.bytes.len() {
            return Err(DeviceError::OutOfBounds {
                offset,
                requested: dst.len(),
                length: allocation.bytes.len(),
            });
        }
        dst.copy_from_slice(&allocation.bytes[offset..end]);
        self.copies.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn dumper(
    root: &Path,
    op_list: Option<&str>,
) -> TensorDumper {
    dumper_with_contexts(root, op_list, Arc::new(DeviceContextPool::new()))
}

pub fn dumper_with_contexts(
    root: &Path,
    op_list: Option<&str>,
    contexts: Arc<DeviceContextPool>,
) -> TensorDumper {
    let config = DumpConfig::new(op_list.map(str::to_string), root);
    TensorDumper::new(&config, contexts)
}

/// Every regular file below `root`, sorted.
pub fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}
