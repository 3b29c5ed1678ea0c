use std::{
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use super::{DeviceError, Place};
use crate::tensor::Allocation;

/// Owner of a device's memory. The runtime registers one per place it
/// executes on; dumping only ever needs the blocking device-to-host copy.
pub trait DeviceContext: Send + Sync {
    fn place(&self) -> Place;

    /// Copies `dst.len()` bytes starting at `offset` of `src` into `dst`.
    /// Returns once the bytes are visible to the host.
    fn copy_to_host(
        &self,
        src: &dyn Allocation,
        offset: usize,
        dst: &mut [u8],
    ) -> Result<(), DeviceError>;
}

#[derive(Debug, Default)]
pub struct HostContext;

impl DeviceContext for HostContext {
    fn place(&self) -> Place {
        Place::Cpu
    }

    fn copy_to_host(
        &self,
        src: &dyn Allocation,
        offset: usize,
        dst: &mut [u8],
    ) -> Result<(), DeviceError> {
        let bytes = src
            .host_bytes()
            .ok_or_else(|| DeviceError::NotHostAddressable(src.place().clone()))?;
        let end = offset + dst.len();
        if end > bytes.len() {
            return Err(DeviceError::OutOfBounds {
                offset,
                requested: dst.len(),
                length: bytes.len(),
            });
        }
        dst.copy_from_slice(&bytes[offset..end]);
        Ok(())
    }
}

/// Device contexts keyed by place. The host context is always present.
pub struct DeviceContextPool {
    contexts: RwLock<HashMap<Place, Arc<dyn DeviceContext>>>,
}

impl DeviceContextPool {
    pub fn new() -> Self {
        let host: Arc<dyn DeviceContext> = Arc::new(HostContext);
        Self {
            contexts: RwLock::new(HashMap::from([(Place::Cpu, host)])),
        }
    }

    /// Process-wide pool used by the global dump entry point.
    pub fn global() -> Arc<DeviceContextPool> {
        static POOL: OnceLock<Arc<DeviceContextPool>> = OnceLock::new();
        POOL.get_or_init(|| Arc::new(DeviceContextPool::new())).clone()
    }

    /// Registers `context` under its place, replacing any previous one.
    pub fn register(
        &self,
        context: Arc<dyn DeviceContext>,
    ) {
        let place = context.place();
        self.contexts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(place, context);
    }

    pub fn get(
        &self,
        place: &Place,
    ) -> Option<Arc<dyn DeviceContext>> {
        self.contexts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(place)
            .cloned()
    }
}

impl Default for DeviceContextPool {
    fn default() -> Self {
        Self::new()
    }
}
