pub mod api;
mod chat_model;

pub use chat_model::{SiliconFlowChatModel, SiliconFlowChatModelOptions, DEFAULT_BASE_URL};
