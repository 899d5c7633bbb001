use std::time::Duration;

use crate::client::error::config::ConfigError;

pub struct Config {
    pub api_url: String,
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("DRAFTBOARD_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DRAFTBOARD_API_URL".to_string()))?;

        // Blank tokens are treated as absent so an empty line in .env does not send `Bearer `
        let auth_token = std::env::var("DRAFTBOARD_AUTH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let request_timeout = match std::env::var("DRAFTBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(value.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "DRAFTBOARD_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            auth_token,
            request_timeout,
        })
    }

    /// Configuration for a backend at `api_url` with default settings and no token
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            auth_token: None,
            request_timeout: Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
