pub mod extract;

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::constants::{events, llm};
use crate::error::GenerationError;

pub use extract::extract_text;

/// Wire protocol used to reach the completion service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// `/responses`, tried first
    Responses,
    /// `/chat/completions`, used when the primary isn't available
    ChatCompletions,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Responses => f.write_str("responses"),
            Protocol::ChatCompletions => f.write_str("chat"),
        }
    }
}

/// "Given a system and a user instruction, produce text"
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Clone)]
pub struct LLMClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    pub model: String,
    max_tokens: u32,
    temperature: f32,
}

impl LLMClient {
    pub fn new(cfg: &LlmConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(llm::REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: cfg.api_key.clone().unwrap_or_default(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn responses_request<'a>(&'a self, system: &'a str, user: &'a str) -> ResponsesRequest<'a> {
        ResponsesRequest {
            model: &self.model,
            input: [
                InputMessage {
                    role: "system",
                    content: system,
                },
                InputMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_output_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    #[allow(deprecated)]
    fn chat_request(
        &self,
        system: &str,
        user: &str,
    ) -> Result<CreateChatCompletionRequest, GenerationError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(system)
                        .build()?,
                ),
                ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(user)
                        .build()?,
                ),
            ])
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()?;
        Ok(request)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, GenerationError> {
        Ok(self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?)
    }

    /// Primary protocol first; one chat fallback if it isn't there.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        info!("🤖 [LLM] Sending request (Model: {}, protocol: {})...", self.model, Protocol::Responses);

        let response = self
            .post(llm::RESPONSES_PATH, &self.responses_request(system, user))
            .await?;

        if is_unsupported(response.status()) {
            warn!(
                event = events::PROTOCOL_FALLBACK,
                status = response.status().as_u16(),
                "⚠️ [LLM] Responses endpoint unavailable, falling back to chat completions"
            );
            let request = self.chat_request(system, user)?;
            let response = self.post(llm::CHAT_COMPLETIONS_PATH, &request).await?;
            return read_text(Protocol::ChatCompletions, response).await;
        }

        read_text(Protocol::Responses, response).await
    }
}

#[async_trait]
impl Generator for LLMClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        self.chat(system, user).await
    }
}

/// Statuses meaning "this protocol isn't served here"
fn is_unsupported(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::NOT_IMPLEMENTED
}

async fn read_text(
    protocol: Protocol,
    response: reqwest::Response,
) -> Result<String, GenerationError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(GenerationError::Upstream {
            protocol,
            status: status.as_u16(),
            body,
        });
    }

    let value: serde_json::Value = serde_json::from_str(&body)
        .map_err(|source| GenerationError::Malformed { protocol, source })?;

    let text = extract_text(&value).ok_or(GenerationError::EmptyContent { protocol })?;
    info!("🤖 [LLM] Response received ({}, {} chars).", protocol, text.len());
    Ok(text)
}
