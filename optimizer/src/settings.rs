use crate::CredentialStore;
use siliconflow_sdk::{ChatCompletionModel, ChatMessage, CompletionInput};
use std::sync::Arc;

/// Outcome of probing the remote service with a candidate secret. Purely
/// informational user feedback; it does not affect optimization calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTestResult {
    Ok,
    Failed { message: String },
}

/// Credential management backing the settings screen.
pub struct Settings {
    credentials: CredentialStore,
    model: Arc<dyn ChatCompletionModel>,
}

impl Settings {
    #[must_use]
    pub fn new(credentials: CredentialStore, model: Arc<dyn ChatCompletionModel>) -> Self {
        Self { credentials, model }
    }

    /// Persist the secret, trimmed. Empty input after trimming is a no-op.
    pub fn save_api_key(&self, secret: &str) {
        self.credentials.save(secret);
    }

    /// The secret currently saved in the store, if any.
    #[must_use]
    pub fn saved_api_key(&self) -> Option<String> {
        self.credentials.saved()
    }

    /// Probe the remote service with a minimal completion request using the
    /// candidate secret.
    pub async fn test_connection(&self, secret: &str) -> ConnectionTestResult {
        let secret = secret.trim();
        if secret.is_empty() {
            return ConnectionTestResult::Failed {
                message: "Enter an API key first".to_string(),
            };
        }

        let input = CompletionInput {
            messages: vec![ChatMessage::user("Hello")],
            max_tokens: Some(5),
            ..Default::default()
        };

        match self.model.complete(secret, input).await {
            Ok(_) => ConnectionTestResult::Ok,
            Err(error) => {
                tracing::debug!(%error, "connection test failed");
                ConnectionTestResult::Failed {
                    message: error.to_string(),
                }
            }
        }
    }
}
