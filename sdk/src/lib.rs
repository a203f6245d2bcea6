mod client_utils;
mod completion_model;
mod errors;
pub mod siliconflow;
mod types;

pub use completion_model::ChatCompletionModel;
pub use errors::*;
pub use types::*;
