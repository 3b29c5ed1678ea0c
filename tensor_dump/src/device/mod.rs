mod device_context;
mod error;
mod place;

pub use device_context::{DeviceContext, DeviceContextPool, HostContext};
pub use error::DeviceError;
pub use place::Place;
