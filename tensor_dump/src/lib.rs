pub mod config;
pub mod data_type;
pub mod device;
pub mod dump;
pub mod tensor;
pub mod utils;

pub use config::DumpConfig;
pub use data_type::{ArrayElement, DataType};
pub use dump::{CallSite, DumpError, DumpOutcome, TensorDumper, dump_tensor_to_file};
pub use utils::*;
