//! Pipeline configuration loaded from TOML.
//!
//! # Responsibility
//! - Hold the externally supplied settings: endpoint template, store path,
//!   report path and logging preferences.
//!
//! # Invariants
//! - Every key has a default; an empty file is a valid configuration.
//! - Unknown keys are rejected instead of silently ignored.

use crate::fetch::DEFAULT_URL_TEMPLATE;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_FILE: &str = "proteins.sqlite3";
const DEFAULT_REPORT_FILE: &str = "molecular_weights.csv";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub fetch: FetchConfig,
    pub store: StoreConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Request URL with an `{id}` placeholder.
    pub url_template: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite database file; created on first use.
    pub database: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    pub level: Option<String>,
    /// Absolute directory for rolling log files; file logging is off when absent.
    pub dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl PipelineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PipelineConfig};
    use std::path::PathBuf;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert!(config.fetch.url_template.contains("{id}"));
        assert_eq!(config.logging.dir, None);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [store]
            database = "/tmp/proteins.db"

            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.database, PathBuf::from("/tmp/proteins.db"));
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert_eq!(config.report, PipelineConfig::default().report);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PipelineConfig::from_toml_str("[store]\nhost = \"db.local\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
