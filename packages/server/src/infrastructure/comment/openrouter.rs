//! OpenRouter chat completions comment generator.
//!
//! Sends one non-streaming request to the OpenAI-compatible
//! `/v1/chat/completions` endpoint and returns the first choice's text.
//! The whole exchange is bounded by `OpenRouterConfig::timeout`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CommentError, CommentGenerator, TacticalReading};

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 80;
pub const DEFAULT_TEMPERATURE: f64 = 0.8;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const PERSONA_PROMPT: &str = "Tu és um treinador português lendário e sarcástico.";

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// `None` disables the live comment; callers fall back to the template.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENROUTER_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct OpenRouterCommentGenerator {
    config: OpenRouterConfig,
    client: reqwest::Client,
}

impl OpenRouterCommentGenerator {
    pub fn new(mut config: OpenRouterConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.api_key = config.api_key.filter(|key| !key.trim().is_empty());
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn user_prompt(reading: &TacticalReading) -> String {
        format!(
            "O time adversário joga em {} e estamos na fase {}.\nFala como um treinador português sarcástico, mas direto.",
            reading.formation, reading.phase
        )
    }

    async fn request_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CommentError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CommentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CommentError::Status(status.as_u16()));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| CommentError::MalformedResponse(e.to_string()))
    }
}

// --- OpenAI-compatible request/response types ---

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CommentGenerator for OpenRouterCommentGenerator {
    async fn generate(&self, reading: &TacticalReading) -> Result<String, CommentError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(CommentError::MissingCredential);
        };

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: PERSONA_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::user_prompt(reading),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            model = %self.config.model,
            "Requesting coach comment for {} / {}",
            reading.formation,
            reading.phase
        );

        let response = tokio::time::timeout(
            self.config.timeout,
            self.request_completion(api_key, &request),
        )
        .await
        .map_err(|_| CommentError::Timeout)??;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(CommentError::EmptyComment)
    }
}
