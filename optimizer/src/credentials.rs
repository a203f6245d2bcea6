use crate::KeyValueStore;
use std::sync::Arc;

/// Storage key the API key is persisted under.
pub const API_KEY_STORAGE_KEY: &str = "siliconFlowApiKey";

/// Resolves the bearer secret authorizing calls to the remote completion
/// service.
///
/// Lookup prefers the value currently in the store; a blank stored value
/// counts as absent. When the store yields nothing, the build-time fallback
/// applies. The resolved value is never cached: every call re-reads the store.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
    fallback: Option<String>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, fallback: Option<String>) -> Self {
        let fallback = fallback.filter(|value| !value.trim().is_empty());
        Self { store, fallback }
    }

    /// The active secret, or `None` when neither a stored value nor a
    /// fallback exists.
    #[must_use]
    pub fn resolve(&self) -> Option<String> {
        self.store
            .get(API_KEY_STORAGE_KEY)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.fallback.clone())
    }

    /// The secret currently saved in the store, ignoring the fallback.
    #[must_use]
    pub fn saved(&self) -> Option<String> {
        self.store
            .get(API_KEY_STORAGE_KEY)
            .filter(|value| !value.trim().is_empty())
    }

    /// Persist `secret`, trimmed. A value that is empty after trimming is a
    /// no-op.
    pub fn save(&self, secret: &str) {
        let secret = secret.trim();
        if secret.is_empty() {
            return;
        }
        self.store.set(API_KEY_STORAGE_KEY, secret);
    }
}
