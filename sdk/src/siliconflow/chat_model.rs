use super::api::{
    ChatCompletionCreateParams, ChatCompletionMessageParam, ChatCompletionResponse,
    CompletionUsageData, ResponseFormatParam,
};
use crate::{
    client_utils, ChatCompletionModel, ChatMessage, CompletionError, CompletionInput,
    CompletionOutput, CompletionResult, CompletionUsage, ResponseFormat,
};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "siliconflow";

pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";

pub struct SiliconFlowChatModel {
    model_id: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct SiliconFlowChatModelOptions {
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl SiliconFlowChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: SiliconFlowChatModelOptions) -> Self {
        let SiliconFlowChatModelOptions {
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self, api_key: &str) -> CompletionResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let auth_header = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|error| {
            CompletionError::InvalidInput(format!(
                "Invalid SiliconFlow API key header value: {error}"
            ))
        })?;
        headers.insert(header::AUTHORIZATION, auth_header);

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                CompletionError::InvalidInput(format!(
                    "Invalid SiliconFlow header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                CompletionError::InvalidInput(format!(
                    "Invalid SiliconFlow header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ChatCompletionModel for SiliconFlowChatModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn complete(
        &self,
        api_key: &str,
        input: CompletionInput,
    ) -> CompletionResult<CompletionOutput> {
        let request = convert_to_create_params(input, &self.model_id);
        let headers = self.request_headers(api_key)?;

        tracing::debug!(model = %self.model_id, "sending chat completion request");

        let response: ChatCompletionResponse = client_utils::send_json(
            &self.client,
            &format!("{}/chat/completions", self.base_url),
            &request,
            headers,
        )
        .await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            CompletionError::MalformedResponse(PROVIDER, "no choices in response".to_string())
        })?;

        let content = choice.message.content.ok_or_else(|| {
            CompletionError::MalformedResponse(
                PROVIDER,
                "choice message has no text content".to_string(),
            )
        })?;

        let usage = response.usage.map(map_usage);

        Ok(CompletionOutput { content, usage })
    }
}

fn convert_to_create_params(input: CompletionInput, model_id: &str) -> ChatCompletionCreateParams {
    ChatCompletionCreateParams {
        model: model_id.to_string(),
        messages: input.messages.into_iter().map(convert_message).collect(),
        stream: None,
        max_tokens: input.max_tokens,
        stop: None,
        temperature: input.temperature,
        top_p: input.top_p,
        top_k: input.top_k,
        frequency_penalty: input.frequency_penalty,
        n: input.n,
        response_format: input.response_format.map(convert_response_format),
    }
}

fn convert_message(message: ChatMessage) -> ChatCompletionMessageParam {
    ChatCompletionMessageParam {
        role: message.role,
        content: message.content,
    }
}

fn convert_response_format(response_format: ResponseFormat) -> ResponseFormatParam {
    match response_format {
        ResponseFormat::Text => ResponseFormatParam {
            type_field: "text".to_string(),
        },
    }
}

fn map_usage(usage: CompletionUsageData) -> CompletionUsage {
    CompletionUsage {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    }
}
