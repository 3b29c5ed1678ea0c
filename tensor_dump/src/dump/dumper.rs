use std::sync::{Arc, OnceLock};

use super::{
    AllowList, AllowListStore, ArtifactWriter, CallSite, DumpArgument, DumpError,
    DumpOutcome, HostData, OpFilter, Resolution, SkipReason, TensorDesc,
    allow_list::GLOBAL_ALLOW_LIST, materialize, resolve_storage,
};
use crate::{DumpConfig, device::DeviceContextPool, tensor::Tensor};

/// Writes the tensor arguments of allowed operations to disk.
pub struct TensorDumper<A = AllowList> {
    allow_list: A,
    contexts: Arc<DeviceContextPool>,
    writer: ArtifactWriter,
}

impl TensorDumper<AllowList> {
    pub fn new(
        config: &DumpConfig,
        contexts: Arc<DeviceContextPool>,
    ) -> Self {
        Self::with_allow_list(config.allow_list(), ArtifactWriter::new(config.root.clone()), contexts)
    }
}

impl<A: OpFilter> TensorDumper<A> {
    pub fn with_allow_list(
        allow_list: A,
        writer: ArtifactWriter,
        contexts: Arc<DeviceContextPool>,
    ) -> Self {
        Self {
            allow_list,
            contexts,
            writer,
        }
    }

    pub fn allow_list(&self) -> &A {
        &self.allow_list
    }

    /// Dumps every tensor of `argument`, in order. Returns no outcomes when
    /// the operation is filtered out; that check runs once, before any tensor
    /// is looked at. Stops at the first I/O or device failure.
    pub fn dump<T: DumpArgument + ?Sized>(
        &self,
        site: &CallSite,
        argument: &T,
    ) -> Result<Vec<DumpOutcome>, DumpError> {
        if !self.allow_list.is_allowed(site.op_name) {
            return Ok(Vec::new());
        }
        argument.tensors().map(|tensor| self.dump_allowed(site, tensor)).collect()
    }

    /// Single-tensor form of [`TensorDumper::dump`]; `None` when filtered out.
    pub fn dump_tensor(
        &self,
        site: &CallSite,
        tensor: &Tensor,
    ) -> Result<Option<DumpOutcome>, DumpError> {
        if !self.allow_list.is_allowed(site.op_name) {
            return Ok(None);
        }
        self.dump_allowed(site, tensor).map(Some)
    }

    fn dump_allowed(
        &self,
        site: &CallSite,
        tensor: &Tensor,
    ) -> Result<DumpOutcome, DumpError> {
        let dense = match resolve_storage(tensor) {
            Resolution::Dense(dense) => dense,
            Resolution::Skipped(reason) => return Ok(reason.into()),
        };
        let Some(extractor) = HostData::extractor(dense.data_type()) else {
            return Ok(SkipReason::UnsupportedDataType(dense.data_type()).into());
        };

        let host = materialize(dense, &self.contexts)?;
        let data = extractor.extract(&host)?;

        let address = tensor.address().to_string();
        let descriptor = TensorDesc::new(&address, dense);
        let artifact = self.writer.write(site, &address, &descriptor, data.as_bytes())?;
        Ok(DumpOutcome::Written(artifact))
    }
}

/// Dumper configured from the environment, with the lazily parsed
/// process-wide allow list and device context pool.
pub fn global_dumper() -> &'static TensorDumper<&'static AllowListStore> {
    static DUMPER: OnceLock<TensorDumper<&'static AllowListStore>> = OnceLock::new();
    DUMPER.get_or_init(|| {
        TensorDumper::with_allow_list(
            &GLOBAL_ALLOW_LIST,
            ArtifactWriter::new(DumpConfig::from_env().root),
            DeviceContextPool::global(),
        )
    })
}

/// Entry point for the execution runtime: dumps `argument` of operation
/// `op_name` when `TENSOR_DUMP_OP_LIST` allows it. An error must abort the
/// calling operation.
pub fn dump_tensor_to_file<T: DumpArgument + ?Sized>(
    unique_id: &str,
    op_name: &str,
    arg_role: &str,
    arg_name: &str,
    argument: &T,
) -> Result<(), DumpError> {
    let site = CallSite::new(unique_id, op_name, arg_role, arg_name);
    global_dumper().dump(&site, argument)?;
    Ok(())
}
