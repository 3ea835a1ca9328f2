//! Configuration module
//!
//! Handles loading and saving of threadprint.toml configuration files.
//! Defines Config, Display, and RenderMode types.

mod types;

pub use types::{Config, Display, RenderMode, MIN_WIDTH};

use crate::error::{Result, ThreadPrintError};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "threadprint.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ThreadPrintError::Config(format!(
            "Cannot read config from '{}': {}. Run 'threadprint config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Load an explicit config, else `threadprint.toml` if present, else defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                tracing::debug!("no {} found, using default config", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ThreadPrintError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Reject settings the renderers cannot lay out
pub fn validate(config: &Config) -> Result<()> {
    if config.display.width < MIN_WIDTH {
        return Err(ThreadPrintError::Config(format!(
            "display.width must be at least {}, got {}",
            MIN_WIDTH, config.display.width
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("threadprint.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.display.width, 80);
        assert_eq!(loaded.display.mode, RenderMode::Markdown);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/threadprint.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'threadprint config init'"));
    }

    #[test]
    fn test_load_or_default_explicit_missing_fails() {
        let result = load_or_default(Some(Path::new("/nonexistent/threadprint.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/threadprint.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("threadprint.toml");

        let mut config = Config::default();
        config.display.mode = RenderMode::Plain;
        config.display.width = 100;
        config.display.show_banner = true;

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.display.mode, RenderMode::Plain);
        assert_eq!(loaded.display.width, 100);
        assert!(loaded.display.show_banner);
    }

    #[test]
    fn test_narrow_width_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("threadprint.toml");
        std::fs::write(&config_path, "[display]\nwidth = 5\n").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(err.to_string().contains("display.width must be at least 20"));
    }
}
