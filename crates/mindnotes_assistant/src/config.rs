//! Assistant endpoint configuration.
//!
//! # Responsibility
//! - Hold endpoint, model, credentials and attribution headers.
//! - Load settings from the environment with sensible defaults.

use std::env;

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

const ENV_API_KEY: &str = "MINDNOTES_API_KEY";
const ENV_MODEL: &str = "MINDNOTES_MODEL";
const ENV_ENDPOINT: &str = "MINDNOTES_ENDPOINT";

/// Settings for one assistant gateway instance.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    /// Full chat-completions URL; overridable for tests and proxies.
    pub endpoint: String,
    /// Referer attribution header sent with each request.
    pub referer: String,
    /// Application title attribution header sent with each request.
    pub app_title: String,
}

impl AssistantConfig {
    /// Builds a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            referer: "https://mindnotes.app".to_string(),
            app_title: "Mind Notes".to_string(),
        }
    }

    /// Loads configuration from the environment.
    ///
    /// `MINDNOTES_API_KEY` is required; `MINDNOTES_MODEL` and
    /// `MINDNOTES_ENDPOINT` override the defaults when set.
    ///
    /// # Errors
    /// Returns a human-readable message when the key is missing or blank.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| format!("{ENV_API_KEY} is not set"))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var(ENV_MODEL) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(endpoint) = env::var(ENV_ENDPOINT) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }

        Ok(config)
    }
}
