//! Text-generation capability and its HTTP providers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::{AiConfig, ProviderKind};

use super::{ConversationTurn, Role};

/// Connection timeout for HTTP requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout for HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with proper timeout configuration.
fn build_http_client() -> Result<Client, GenerationError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GenerationError::HttpClient(e.to_string()))
}

/// Errors from text generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API key not configured (env: {0})")]
    MissingApiKey(String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    #[error("Generation request failed: {0}")]
    RequestFailed(String),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Generation request timed out")]
    Timeout,
    #[error("Visitor message is empty")]
    EmptyMessage,
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

/// One generation call: a system instruction plus ordered messages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationRequest<'a> {
    pub system: &'a str,
    pub messages: &'a [ConversationTurn],
}

/// Something that turns a request into generated text.
///
/// `Ok(None)` means the service answered but produced no text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError>;
}

/// Join every text part of a response, `None` when there is none.
fn collect_text<'a>(parts: impl Iterator<Item = &'a serde_json::Value>) -> Option<String> {
    let text: String = parts.filter_map(|p| p["text"].as_str()).collect();
    (!text.is_empty()).then_some(text)
}

async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, GenerationError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(GenerationError::RequestFailed(format!("HTTP {status}: {text}")));
    }

    response
        .json()
        .await
        .map_err(|e| GenerationError::ParseError(e.to_string()))
}

/// Gemini API provider.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::HttpClient` if the HTTP client cannot be built.
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: build_http_client()?,
            base_url,
            api_key,
            model,
            max_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn body(&self, request: &GenerationRequest<'_>) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::Visitor => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({ "role": role, "parts": [{ "text": turn.content }] })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": request.system }]
            },
            "generationConfig": {
                "maxOutputTokens": self.max_tokens
            }
        })
    }
}

#[async_trait]
impl GenerationService for GeminiProvider {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&self.body(request))
            .send()
            .await?;

        let json = read_json(response).await?;
        let parts = json["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter());
        Ok(parts.and_then(collect_text))
    }
}

/// Claude API provider.
#[derive(Debug, Clone)]
pub struct ClaudeProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeProvider {
    /// Create a new Claude provider.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::HttpClient` if the HTTP client cannot be built.
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: build_http_client()?,
            base_url,
            api_key,
            model,
            max_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    fn body(&self, request: &GenerationRequest<'_>) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::Visitor => "user",
                    Role::Assistant => "assistant",
                };
                serde_json::json!({ "role": role, "content": turn.content })
            })
            .collect();

        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": request.system,
            "messages": messages
        })
    }
}

#[async_trait]
impl GenerationService for ClaudeProvider {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&self.body(request))
            .send()
            .await?;

        let json = read_json(response).await?;
        let blocks = json["content"].as_array().map(|blocks| {
            blocks
                .iter()
                .filter(|b| b["type"].as_str().map_or(true, |t| t == "text"))
        });
        Ok(blocks.and_then(collect_text))
    }
}

/// Provider enum for dispatch.
#[derive(Debug, Clone)]
pub enum Provider {
    Gemini(GeminiProvider),
    Claude(ClaudeProvider),
}

#[async_trait]
impl GenerationService for Provider {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        match self {
            Self::Gemini(p) => p.generate(request).await,
            Self::Claude(p) => p.generate(request).await,
        }
    }
}

/// Configured generation client.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    provider: Provider,
    config: AiConfig,
}

impl GenerationClient {
    /// Create a client with the given provider and config.
    #[must_use]
    pub fn new(provider: Provider, config: AiConfig) -> Self {
        Self { provider, config }
    }

    /// Create client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingApiKey` if the configured API key
    /// environment variable is not set.
    pub fn from_config(config: AiConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| GenerationError::MissingApiKey(config.api_key_env.clone()))?;

        let provider = match config.provider {
            ProviderKind::Gemini => Provider::Gemini(GeminiProvider::new(
                config.base_url.clone(),
                api_key,
                config.model.clone(),
                config.max_tokens,
            )?),
            ProviderKind::Claude => Provider::Claude(ClaudeProvider::new(
                config.base_url.clone(),
                api_key,
                config.model.clone(),
                config.max_tokens,
            )?),
        };

        tracing::debug!(provider = ?config.provider, model = %config.model, "Generation client ready");
        Ok(Self { provider, config })
    }

    /// Get the configured model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the provider kind.
    #[must_use]
    pub fn provider_kind(&self) -> &ProviderKind {
        &self.config.provider
    }
}

#[async_trait]
impl GenerationService for GenerationClient {
    async fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Option<String>, GenerationError> {
        self.provider.generate(request).await
    }
}
