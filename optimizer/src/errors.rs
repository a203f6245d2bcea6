use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    /// No credential is stored and no build-time fallback is configured. The
    /// calling screen should direct the user to the settings screen.
    #[error("No API key is configured; add one in the settings screen")]
    MissingCredential,
    /// The prompt was empty after trimming whitespace.
    #[error("Prompt must not be empty")]
    EmptyPrompt,
    #[error("Completion error: {0}")]
    Completion(#[from] siliconflow_sdk::CompletionError),
}
