/// Shell configuration
/// Optional `shell.json` in the app config directory; anything missing falls back to defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::services::mock_fs::HOME_PATH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// What `cd ..` resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentResolution {
    /// Always jump back to the home path
    #[default]
    Root,
    /// Strip the last path segment
    Strip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Starting directory of new terminals, also the `cd ..` target in `Root` mode
    pub home_path: String,
    pub parent_resolution: ParentResolution,
    /// Oldest history entries are dropped past this many
    pub history_limit: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_path: HOME_PATH.to_string(),
            parent_resolution: ParentResolution::Root,
            history_limit: 500,
        }
    }
}

impl ShellConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Like [`ShellConfig::load`] but logs failures and falls back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load(&dir.path().join("shell.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, r#"{ "parentResolution": "strip", "historyLimit": 3 }"#).unwrap();

        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.parent_resolution, ParentResolution::Strip);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.home_path, HOME_PATH);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(ShellConfig::load(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(ShellConfig::load_or_default(&path), ShellConfig::default());
    }
}
