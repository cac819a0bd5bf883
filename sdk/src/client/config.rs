//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::path::PathBuf;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MATEDU_API_URL";

/// Environment variable overriding the token file location.
pub const TOKEN_FILE_ENV: &str = "MATEDU_TOKEN_FILE";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for the API, including the `/api/v1` prefix.
    pub base_url: String,

    /// User agent string.
    pub user_agent: String,

    /// Token file location. `None` uses the platform data directory.
    pub token_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("matedu-sdk/{}", env!("CARGO_PKG_VERSION")),
            token_path: None,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Builds a configuration from `MATEDU_API_URL` and `MATEDU_TOKEN_FILE`,
    /// falling back to defaults for unset or blank variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = read(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.token_path = read(TOKEN_FILE_ENV).map(PathBuf::from);
        config
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the token file location.
    #[must_use]
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), super::error::ClientError> {
        if self.base_url.is_empty() {
            return Err(super::error::ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(super::error::ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
