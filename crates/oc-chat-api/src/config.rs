//! Chat API server configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level API server configuration, read from `OPSCHAT_*` env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with `service-operations.json`, `intent-fields.json` and
    /// `stopwords.txt`. Unset → built-in sample configuration.
    #[serde(default)]
    pub config_dir: Option<PathBuf>,
    /// Root directory for downloadable artifacts (postman/, logs/).
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("store")
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("OPSCHAT_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("OPSCHAT_PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        if let Ok(dir) = std::env::var("OPSCHAT_CONFIG_DIR") {
            config.config_dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = std::env::var("OPSCHAT_STORE_DIR") {
            config.store_dir = PathBuf::from(dir);
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            config_dir: None,
            store_dir: default_store_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.config_dir.is_none());
        assert_eq!(config.store_dir, PathBuf::from("store"));
    }
}
