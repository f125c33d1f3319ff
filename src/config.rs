use std::fmt;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";
pub const LOG_VAR: &str = "BOOKMOOD_LOG";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable must be set")]
    MissingApiKey,
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub endpoint: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let endpoint = get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            api_key,
            endpoint,
            log_filter,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}
