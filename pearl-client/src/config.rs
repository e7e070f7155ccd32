//! Client configuration

use std::path::PathBuf;

/// Environment variable naming the backend base URL
pub const ENV_BACKEND_URL: &str = "PEARL_BACKEND_URL";
/// Environment variable for the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PEARL_TIMEOUT_SECS";
/// Environment variable for the local data directory (session file)
pub const ENV_DATA_DIR: &str = "PEARL_DATA_DIR";

/// Client configuration for connecting to the store backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Bearer token for authentication, when the backend issued one
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory for locally persisted state (the session file)
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            data_dir: PathBuf::from("."),
        }
    }

    /// Load configuration from the environment (reads `.env` when present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(ENV_BACKEND_URL)
            .unwrap_or_else(|_| "http://localhost:4000".to_string());
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS)
            && let Ok(secs) = raw.parse::<u64>()
        {
            config.timeout = secs;
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the local data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::new("http://localhost:9000").with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token, None);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }
}
