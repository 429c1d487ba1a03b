//! Client configuration

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::{
    api::HttpCartApi,
    notifications::SUCCESS_DISMISS_DELAY,
    render::{CartRenderer, DEFAULT_IMAGE_BASE_PATH},
};

/// Default `localStorage` key holding the signed-in user's token.
pub const DEFAULT_SESSION_KEY: &str = "token";

/// Errors raised while loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_norway::Error),

    /// The API base URL is not an absolute HTTP(S) URL.
    #[error("base_url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Settings shared by every cart front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Cart API base URL
    pub base_url: String,

    /// Directory product images are served from
    pub image_base_path: String,

    /// Milliseconds before a success notification is removed
    pub success_dismiss_ms: u64,

    /// `localStorage` key holding the session token
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            image_base_path: DEFAULT_IMAGE_BASE_PATH.to_string(),
            success_dismiss_ms: u64::try_from(SUCCESS_DISMISS_DELAY.as_millis())
                .unwrap_or(u64::MAX),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an HTTP(S) URL.
    pub fn for_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .validated()
    }

    /// Parse a YAML document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the base URL is invalid.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(source)?;

        config.validated()
    }

    /// Check the configuration and normalise the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an HTTP(S) URL.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url));
        }

        self.base_url = trimmed.to_string();

        Ok(self)
    }

    /// Success notification lifetime.
    pub fn success_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }

    /// HTTP client for the configured API.
    pub fn api(&self) -> HttpCartApi {
        HttpCartApi::new(self.base_url.clone())
    }

    /// Page renderer for the configured image directory.
    pub fn renderer(&self) -> CartRenderer {
        CartRenderer::new(self.image_base_path.clone())
    }
}
