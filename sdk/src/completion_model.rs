use crate::{CompletionInput, CompletionOutput, CompletionResult};

/// A model that can answer a single chat-completion request.
///
/// The bearer secret is an argument to every call rather than construction
/// state: callers resolve the active credential at call time, so the model
/// never caches one across calls.
#[async_trait::async_trait]
pub trait ChatCompletionModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    async fn complete(
        &self,
        api_key: &str,
        input: CompletionInput,
    ) -> CompletionResult<CompletionOutput>;
}
