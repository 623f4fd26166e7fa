use crate::error::PolishError;
use crate::polish::traits::Polisher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You are a helpful real estate assistant. Polish this property information to make it sound natural and conversational while keeping all the facts intact.";
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 200;

/// Connection settings for the chat completion endpoint
#[derive(Debug, Clone)]
pub struct PolishSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Polisher backed by Groq's OpenAI-compatible chat completion API
pub struct GroqPolisher {
    client: Client,
    settings: PolishSettings,
}

impl GroqPolisher {
    pub fn new(settings: PolishSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    fn status_error(status: StatusCode) -> PolishError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PolishError::Auth(status.as_u16()),
            StatusCode::TOO_MANY_REQUESTS => PolishError::Quota,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => PolishError::Timeout,
            other => PolishError::Status(other.as_u16()),
        }
    }

    fn first_completion(response: CompletionResponse) -> Result<String, PolishError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(PolishError::EmptyCompletion)
    }
}

#[async_trait]
impl Polisher for GroqPolisher {
    async fn polish(&self, text: &str) -> Result<String, PolishError> {
        let body = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": text }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        debug!("Requesting polish from {}", self.settings.endpoint);

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Polish service returned status: {}", response.status());
            return Err(Self::status_error(response.status()));
        }

        let completion: CompletionResponse = response.json().await?;
        Self::first_completion(completion)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
