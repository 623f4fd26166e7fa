use crate::polish::PolishSettings;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

const GROQ_CHAT_COMPLETIONS: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listings dataset
    pub properties_path: PathBuf,
    /// Append-only log of every chat turn
    pub interactions_path: PathBuf,
    /// Append-only log of completed visit bookings
    pub visits_path: PathBuf,
    /// Polishing is disabled without a key
    pub groq_api_key: Option<String>,
    pub polish_model: String,
    pub polish_endpoint: String,
    pub polish_timeout: Duration,
    /// Longest accepted message, in characters
    pub max_message_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from("data/properties.csv"),
            interactions_path: PathBuf::from("data/interactions.csv"),
            visits_path: PathBuf::from("data/visits.csv"),
            groq_api_key: None,
            polish_model: "mixtral-8x7b-32768".to_string(),
            polish_endpoint: GROQ_CHAT_COMPLETIONS.to_string(),
            polish_timeout: Duration::from_secs(15),
            max_message_chars: 4096,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let polish_timeout = match get("POLISH_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("POLISH_TIMEOUT_SECS is not a number: {}", raw))?,
            ),
            None => defaults.polish_timeout,
        };
        let max_message_chars = match get("MAX_MESSAGE_CHARS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MAX_MESSAGE_CHARS is not a number: {}", raw))?,
            None => defaults.max_message_chars,
        };

        Ok(Self {
            properties_path: get("PROPERTIES_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.properties_path),
            interactions_path: get("INTERACTIONS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.interactions_path),
            visits_path: get("VISITS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.visits_path),
            groq_api_key: get("GROQ_API_KEY"),
            polish_model: get("POLISH_MODEL").unwrap_or(defaults.polish_model),
            polish_endpoint: get("POLISH_ENDPOINT").unwrap_or(defaults.polish_endpoint),
            polish_timeout,
            max_message_chars,
        })
    }

    /// Settings for the polish service, if a key is configured
    pub fn polish_settings(&self) -> Option<PolishSettings> {
        self.groq_api_key.as_ref().map(|api_key| PolishSettings {
            api_key: api_key.clone(),
            model: self.polish_model.clone(),
            endpoint: self.polish_endpoint.clone(),
            timeout: self.polish_timeout,
        })
    }
}
