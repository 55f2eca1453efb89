use reqwest::blocking::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::error::ClientError;

/// Sampling settings for one call site. Fixed at compile time, never tuned at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

/// A blocking text-completion backend.
pub trait CompletionClient: Send {
    fn complete(
        &self,
        system_message: &str,
        user_prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, ClientError>;
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Applies `config` on top of a caller-prepared builder.
    pub(crate) fn with_builder(config: &AppConfig, builder: ClientBuilder) -> anyhow::Result<Self> {
        let http = builder.timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.base_url),
        })
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(
        &self,
        system_message: &str,
        user_prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, ClientError> {
        let req = ChatCompletionRequest {
            model: &params.model,
            messages: vec![
                ChatMessage { role: "system", content: system_message },
                ChatMessage { role: "user", content: user_prompt },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
        };

        debug!(
            model = %params.model,
            max_tokens = params.max_tokens,
            prompt_len = user_prompt.len(),
            "sending completion request"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().map_err(transport_error)?;

        if !status.is_success() {
            error!(status = status.as_u16(), "completion endpoint returned an error");
            return Err(ClientError::RequestFailed(format!(
                "API error (status {}): {}",
                status.as_u16(),
                body.trim()
            )));
        }

        first_choice_text(&body)
    }
}

/// Extracts the trimmed text of the first choice from a raw response body.
pub fn first_choice_text(body: &str) -> Result<String, ClientError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ClientError::RequestFailed(format!("invalid response: {e}")))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::RequestFailed("response contained no choices".into()))?;

    let text = choice
        .message
        .content
        .ok_or_else(|| ClientError::RequestFailed("completion had no text content".into()))?;

    Ok(text.trim().to_string())
}

fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        error!("completion request timed out");
        ClientError::RequestFailed("timeout".into())
    } else {
        error!(error = %e, "completion request failed");
        ClientError::RequestFailed(e.to_string())
    }
}
