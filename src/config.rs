use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::signup::DEFAULT_MIN_PASSWORD_LEN;
use crate::tui::events::Page;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub signup: SignupConfig,
    pub counter: CounterConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Page shown on startup.
    pub start_page: Page,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Minimum password length, counted in characters.
    pub min_password_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Initial text of the increment-amount box.
    pub default_amount: i64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            start_page: Page::Onboarding,
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { default_amount: 2 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl AppConfig {
    /// Load configuration from `~/.config/saas-onboarding/config.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file yields the defaults; an unreadable or unparseable one is
    /// an error so the caller can tell the user before falling back.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("saas-onboarding").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert_eq!(config.tui.start_page, Page::Onboarding);
        assert_eq!(config.signup.min_password_len, 8);
        assert_eq!(config.counter.default_amount, 2);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.tui.tick_rate_ms, 50);
    }

    #[test]
    fn test_config_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[tui]\nstart_page = \"counter\"\n\n[signup]\nmin_password_len = 12\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.tui.start_page, Page::Counter);
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert_eq!(config.signup.min_password_len, 12);
        assert_eq!(config.counter.default_amount, 2);
    }

    #[test]
    fn test_config_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tui = 7").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config at "));
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(AppConfig::config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.tui.tick_rate_ms, config.tui.tick_rate_ms);
        assert_eq!(deserialized.tui.start_page, config.tui.start_page);
    }
}
