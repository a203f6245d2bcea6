use serde::{Deserialize, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a chat-completion conversation. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The format that the model must output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Plain text output.
    Text,
}

/// Provider-agnostic parameters for a single chat-completion call.
///
/// This is the narrow seam between callers and the provider wire format: a
/// future provider change only touches the conversion inside the model
/// implementation, not the call sites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionInput {
    pub messages: Vec<ChatMessage>,
    /// Upper bound for the number of generated tokens.
    pub max_tokens: Option<u32>,
    /// Amount of randomness injected into the response. Ranges from 0.0 to 2.0
    pub temperature: Option<f64>,
    /// Nucleus sampling: consider only tokens within `top_p` probability mass.
    pub top_p: Option<f64>,
    /// Only sample from the top K options for each subsequent token.
    pub top_k: Option<i32>,
    /// Positive values penalize tokens by their existing frequency in the text
    /// so far, decreasing the model's likelihood to repeat itself verbatim.
    pub frequency_penalty: Option<f64>,
    /// How many completions to generate. Only the first choice is consumed.
    pub n: Option<u32>,
    pub response_format: Option<ResponseFormat>,
}

/// Token usage counters reported by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The parsed result of a chat-completion call: the text content of the first
/// choice, plus usage counters when the provider reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOutput {
    pub content: String,
    pub usage: Option<CompletionUsage>,
}
