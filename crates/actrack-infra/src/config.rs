//! Global configuration loader for actrack.
//!
//! Reads `config.toml` from the data directory (`~/.actrack/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use actrack_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Presence handshake bound, never shorter than one second.
pub fn handshake_timeout(config: &GlobalConfig) -> Duration {
    Duration::from_secs(config.presence.handshake_timeout_secs.max(1))
}

/// Resolve the frontend directory. Relative paths are taken from the
/// current working directory.
pub fn resolve_web_dir(config: &GlobalConfig) -> PathBuf {
    PathBuf::from(&config.server.web_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.presence.default_image, "default_image");
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[server]
host = "0.0.0.0"
port = 8123
web_dir = "/srv/actrack"

[presence]
default_image = "logo"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8123);
        assert_eq!(resolve_web_dir(&config), PathBuf::from("/srv/actrack"));
        assert_eq!(config.presence.default_image, "logo");
        assert_eq!(config.presence.handshake_timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn handshake_timeout_has_floor() {
        let mut config = GlobalConfig::default();
        assert_eq!(handshake_timeout(&config), Duration::from_secs(10));

        config.presence.handshake_timeout_secs = 0;
        assert_eq!(handshake_timeout(&config), Duration::from_secs(1));
    }
}
