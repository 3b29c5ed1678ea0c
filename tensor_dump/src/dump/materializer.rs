use std::borrow::Cow;

use super::DumpError;
use crate::{device::DeviceContextPool, tensor::DenseTensor};

/// Returns `tensor` itself when its bytes are host addressable, otherwise a
/// full host copy made through the device context owning its place.
pub fn materialize<'t>(
    tensor: &'t DenseTensor,
    contexts: &DeviceContextPool,
) -> Result<Cow<'t, DenseTensor>, DumpError> {
    let Some(place) = tensor.place() else {
        return Ok(Cow::Borrowed(tensor));
    };
    if place.is_host() {
        return Ok(Cow::Borrowed(tensor));
    }

    let context = contexts
        .get(place)
        .ok_or_else(|| DumpError::MissingDeviceContext(place.clone()))?;
    let host = tensor.to_host(context.as_ref()).map_err(|source| DumpError::DeviceCopy {
        place: place.clone(),
        source,
    })?;
    Ok(Cow::Owned(host))
}
