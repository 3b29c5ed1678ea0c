//! Selective dumping of operation arguments for offline numerical debugging.
//!
//! Every call is synchronous: device tensors are copied to the host and both
//! files are written before the call returns. Keep dumping out of
//! performance-sensitive and production runs.

mod allow_list;
mod argument;
mod artifact_writer;
mod call_site;
mod descriptor;
mod dumper;
mod error;
mod host_data;
mod materializer;
mod outcome;
mod storage;

pub use allow_list::{
    AllowList, AllowListStore, OpFilter, WILDCARD, global_allow_list,
};
pub use argument::DumpArgument;
pub use artifact_writer::ArtifactWriter;
pub use call_site::CallSite;
pub use descriptor::TensorDesc;
pub use dumper::{TensorDumper, dump_tensor_to_file, global_dumper};
pub use error::DumpError;
pub use host_data::{Extractor, HostData};
pub use materializer::materialize;
pub use outcome::{DumpArtifact, DumpOutcome, SkipReason};
pub use storage::{Resolution, resolve_storage};
