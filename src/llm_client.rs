use crate::config::LlmConfig;
use crate::types::{RepurposerError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// Message role accepted by the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Trait for completion clients that turn role-tagged messages into
/// generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Name of this client, for logging.
    fn client_name(&self) -> String;

    /// Submit messages and return the generated text. Network errors,
    /// non-success statuses, malformed bodies and empty choice lists all
    /// surface as errors.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints (OpenAI, Groq,
/// and gateways exposing the same API).
pub struct OpenAiClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn client_name(&self) -> String {
        format!("openai-compatible ({})", self.config.model)
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        debug!("Requesting completion from {} ({} messages)", url, messages.len());

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RepurposerError::Completion(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            RepurposerError::Completion(format!("Malformed response: {}", e))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RepurposerError::EmptyCompletion)?;

        Ok(content.trim().to_string())
    }
}

/// Deterministic completion client for tests and offline runs: returns a
/// fixed response, or fails every call when built with [`failing`].
///
/// [`failing`]: MockCompletionClient::failing
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    response: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCompletionClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// A client whose every call fails, forcing the deterministic
    /// fallback path.
    pub fn failing() -> Self {
        Self {
            response: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `complete` was called, shared across clones.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    fn client_name(&self) -> String {
        match self.response {
            Some(_) => "mock".to_string(),
            None => "mock (failing)".to_string(),
        }
    }

    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        *self.call_count.lock().unwrap() += 1;

        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(RepurposerError::Completion(
                "Mock client configured to fail".to_string(),
            )),
        }
    }
}
