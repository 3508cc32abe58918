//! CLI configuration, persisted as TOML.
//!
//! Looked up at `taxocode.toml` in the working directory unless a path is
//! given explicitly. A missing default file is not an error; every field has
//! a default.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::docs;

/// Config file consulted when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "taxocode.toml";

/// Errors from loading or saving configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(taxocode::config::read),
        help("Ensure the config file exists and is readable, or omit --config to use defaults.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(taxocode::config::parse),
        help("Check the TOML syntax. Known tables are [docs] (output, title) and [log] (filter).")
    )]
    Parse { path: String, message: String },

    #[error("failed to write {path}")]
    #[diagnostic(
        code(taxocode::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Documentation generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Where `taxocode docs` writes the Markdown document.
    #[serde(default = "default_docs_output")]
    pub output: PathBuf,
    /// Top-level heading of the document.
    #[serde(default = "default_docs_title")]
    pub title: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_docs_output() -> PathBuf {
    PathBuf::from("docs/error-codes.md")
}
fn default_docs_title() -> String {
    docs::DEFAULT_TITLE.into()
}
fn default_log_filter() -> String {
    "warn".into()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            output: default_docs_output(),
            title: default_docs_title(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        write_file(path, &content)
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> ConfigResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| ConfigError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.docs.output, PathBuf::from("docs/error-codes.md"));
        assert_eq!(cfg.docs.title, "Error Codes Documentation");
        assert_eq!(cfg.log.filter, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[docs]\ntitle = \"Codes\"\n").unwrap();
        assert_eq!(cfg.docs.title, "Codes");
        assert_eq!(cfg.docs.output, default_docs_output());
        assert_eq!(cfg.log, LogConfig::default());
    }

    #[test]
    fn config_roundtrip_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("taxocode.toml");

        let cfg = Config {
            docs: DocsConfig {
                output: PathBuf::from("out/codes.md"),
                ..Default::default()
            },
            log: LogConfig {
                filter: "taxocode=debug".into(),
            },
        };
        cfg.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), cfg);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Config::discover(Some(&tmp.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "[docs\noutput = 3").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
