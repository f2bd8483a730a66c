//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Describe where baseline documents live, where overrides persist and how
//!   logging is set up.
//! - Load from a JSON file and/or `FACTSITE_*` environment variables.
//!
//! # Invariants
//! - A loaded config has passed `validate()`.
//! - `database_path = None` means no persistence (in-memory overrides).

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_DATA_ROOT: &str = "FACTSITE_DATA_ROOT";
pub const ENV_DB_PATH: &str = "FACTSITE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FACTSITE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FACTSITE_LOG_DIR";

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// Directory containing `data/facts.json` and friends.
    pub data_root: PathBuf,
    /// SQLite file for override snapshots and site state.
    pub database_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling logs; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("public"),
            database_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads a JSON config file; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `FACTSITE_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies non-blank values returned by `lookup` for the `FACTSITE_*`
    /// keys.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        if let Some(root) = value(ENV_DATA_ROOT) {
            self.data_root = PathBuf::from(root);
        }
        if let Some(db_path) = value(ENV_DB_PATH) {
            self.database_path = Some(PathBuf::from(db_path));
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(log_dir) = value(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(log_dir));
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("dataRoot cannot be empty".to_string()));
        }
        normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "logDir must be absolute, got `{}`",
                    log_dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_DB_PATH, ENV_LOG_LEVEL};
    use std::path::PathBuf;

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factsite.json");
        std::fs::write(&path, r#"{"dataRoot":"site/public","databasePath":"site.db"}"#).unwrap();

        let config = CoreConfig::load(&path).unwrap();
        assert_eq!(config.data_root, PathBuf::from("site/public"));
        assert_eq!(config.database_path, Some(PathBuf::from("site.db")));
        assert_eq!(config.log_level, CoreConfig::default().log_level);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn load_rejects_bad_level_and_relative_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factsite.json");

        std::fs::write(&path, r#"{"logLevel":"loud"}"#).unwrap();
        assert!(matches!(
            CoreConfig::load(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        std::fs::write(&path, r#"{"logDir":"logs"}"#).unwrap();
        assert!(matches!(
            CoreConfig::load(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        std::fs::write(&path, "{").unwrap();
        assert!(matches!(
            CoreConfig::load(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let config = CoreConfig::default().with_overrides(|key| match key {
            ENV_DB_PATH => Some("/tmp/site.db".to_string()),
            ENV_LOG_LEVEL => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/site.db")));
        assert_eq!(config.log_level, CoreConfig::default().log_level);
    }
}
