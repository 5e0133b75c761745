//! Global configuration types for actrack.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory. Every field has a default so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::presence::DEFAULT_ASSET_KEY;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub presence: PresenceConfig,
}

/// HTTP server settings. CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind; 0 lets the OS pick a free one.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of the built frontend, served as SPA fallback when present.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_web_dir() -> String {
    "frontend/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// Presence integration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Image key used when an activity has none.
    #[serde(default = "default_image")]
    pub default_image: String,

    /// How long to wait for the presence client handshake before giving up.
    #[serde(default = "default_handshake_timeout_secs")]
    pub handshake_timeout_secs: u64,
}

fn default_image() -> String {
    DEFAULT_ASSET_KEY.to_string()
}

fn default_handshake_timeout_secs() -> u64 {
    10
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            default_image: default_image(),
            handshake_timeout_secs: default_handshake_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.presence.default_image, "default_image");
        assert_eq!(config.presence.handshake_timeout_secs, 10);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.web_dir, "frontend/dist");
    }

    #[test]
    fn test_global_config_partial_section() {
        let toml_str = r#"
[server]
port = 0

[presence]
handshake_timeout_secs = 3
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 0);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.presence.handshake_timeout_secs, 3);
        assert_eq!(config.presence.default_image, "default_image");
    }
}
