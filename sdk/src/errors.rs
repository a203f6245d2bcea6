use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed at the transport level.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code. Carries the status and
    /// the raw response body for the caller to summarize.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response had a success status but an unexpected shape (e.g. no
    /// choices returned, or a choice without text content).
    #[error("Malformed response from {0}: {1}")]
    MalformedResponse(&'static str, String),
}

pub type CompletionResult<T> = Result<T, CompletionError>;
