//! Data directory layout for actrack.
//!
//! Everything the application persists lives under one directory:
//! `config.toml` and the SQLite database `actrack.db`.

use std::path::{Path, PathBuf};

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `ACTRACK_DATA_DIR` environment variable
/// 2. `~/.actrack` in the user's home directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ACTRACK_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    // Use home directory fallback: ~/.actrack
    if let Some(home) = dirs::home_dir() {
        return home.join(".actrack");
    }

    // Last resort: current directory
    PathBuf::from(".actrack")
}

/// Create the data directory if it does not exist yet.
pub async fn ensure_data_dir(data_dir: &Path) -> Result<(), std::io::Error> {
    tokio::fs::create_dir_all(data_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_ensure_data_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("actrack");

        ensure_data_dir(&nested).await.unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op.
        ensure_data_dir(&nested).await.unwrap();
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("ACTRACK_DATA_DIR", "/tmp/test-actrack");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-actrack"));
        unsafe {
            std::env::remove_var("ACTRACK_DATA_DIR");
        }
    }
}
