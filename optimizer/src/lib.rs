mod credentials;
mod errors;
mod history;
mod modes;
mod optimizer;
mod settings;
mod storage;
mod templates;

pub use credentials::{CredentialStore, API_KEY_STORAGE_KEY};
pub use errors::OptimizeError;
pub use history::{HistoryEntry, HistoryLog, HISTORY_LIMIT, HISTORY_STORAGE_KEY};
pub use modes::{OptimizationMode, SYSTEM_PREAMBLE};
pub use optimizer::{PromptOptimizer, PromptOptimizerParams, DEFAULT_MODEL_ID};
pub use settings::{ConnectionTestResult, Settings};
pub use storage::{KeyValueStore, MemoryStore};
pub use templates::{built_in_templates, PromptTemplate};
