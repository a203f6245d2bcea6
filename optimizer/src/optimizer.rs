use crate::{
    CredentialStore, HistoryEntry, HistoryLog, KeyValueStore, OptimizationMode, OptimizeError,
};
use siliconflow_sdk::{
    siliconflow::{SiliconFlowChatModel, SiliconFlowChatModelOptions},
    ChatCompletionModel, ChatMessage, CompletionInput, ResponseFormat,
};
use std::sync::Arc;

/// Model used for every optimization request.
pub const DEFAULT_MODEL_ID: &str = "Qwen/QwQ-32B";

/// Parameters required to create a new optimizer.
/// # Default Values
/// - `fallback_api_key`: the `SILICONFLOW_API_KEY` environment variable baked
///   in at build time, if set.
pub struct PromptOptimizerParams {
    /// The chat-completion model answering the rewrite requests.
    pub model: Arc<dyn ChatCompletionModel>,
    /// Backing store for the saved credential and the history log.
    pub store: Arc<dyn KeyValueStore>,
    /// Used only when no locally-saved credential exists.
    pub fallback_api_key: Option<String>,
}

impl PromptOptimizerParams {
    #[must_use]
    pub fn new(model: Arc<dyn ChatCompletionModel>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            model,
            store,
            fallback_api_key: option_env!("SILICONFLOW_API_KEY").map(ToString::to_string),
        }
    }

    /// Wire the fixed default SiliconFlow model over `store`, the way the
    /// shipped application runs.
    #[must_use]
    pub fn with_default_model(store: Arc<dyn KeyValueStore>) -> Self {
        let model = SiliconFlowChatModel::new(
            DEFAULT_MODEL_ID,
            SiliconFlowChatModelOptions::default(),
        );
        Self::new(Arc::new(model), store)
    }

    #[must_use]
    pub fn with_fallback_api_key(mut self, fallback_api_key: Option<String>) -> Self {
        self.fallback_api_key = fallback_api_key;
        self
    }
}

/// Builds one rewrite request per user action, sends it to the
/// chat-completion model, and appends successful transactions to the history
/// log.
///
/// Calls are independent: there is no deduplication, cancellation, or retry.
/// The triggering control is expected to disable itself while a call is
/// pending.
pub struct PromptOptimizer {
    model: Arc<dyn ChatCompletionModel>,
    credentials: CredentialStore,
    history: HistoryLog,
}

impl PromptOptimizer {
    #[must_use]
    pub fn new(params: PromptOptimizerParams) -> Self {
        let PromptOptimizerParams {
            model,
            store,
            fallback_api_key,
        } = params;
        Self {
            model,
            credentials: CredentialStore::new(store.clone(), fallback_api_key),
            history: HistoryLog::new(store),
        }
    }

    /// Rewrite `prompt` in the style of `mode` and return the optimized text.
    ///
    /// On success exactly one [`HistoryEntry`] is appended; on failure the
    /// history is untouched. The credential is resolved fresh on every call,
    /// before any network activity.
    pub async fn optimize(
        &self,
        prompt: &str,
        mode: OptimizationMode,
    ) -> Result<String, OptimizeError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(OptimizeError::EmptyPrompt);
        }

        let api_key = self
            .credentials
            .resolve()
            .ok_or(OptimizeError::MissingCredential)?;

        tracing::debug!(?mode, "optimizing prompt");

        let input = CompletionInput {
            messages: vec![
                ChatMessage::system(mode.system_instruction()),
                ChatMessage::user(format!(
                    "Original prompt: {prompt}\n\nPlease return only the optimized prompt, with \
                     no explanation."
                )),
            ],
            max_tokens: Some(1024),
            temperature: Some(0.7),
            top_p: Some(0.7),
            top_k: Some(50),
            frequency_penalty: Some(0.5),
            n: Some(1),
            response_format: Some(ResponseFormat::Text),
        };

        let output = self.model.complete(&api_key, input).await?;

        self.history.append(HistoryEntry::record(
            prompt,
            output.content.as_str(),
            self.model.model_id(),
            mode,
        ));

        Ok(output.content)
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}
