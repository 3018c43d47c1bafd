//! Configuration management for `civic_tracker`.
//!
//! Configuration is loaded from YAML files with support for:
//! - User config (~/.config/civic/config.yaml)
//! - Workspace config (.civic/config.yaml)
//! - Environment variable overrides (`CIVIC_DATA_DIR`, `CIVIC_BACKEND`)
//! - CLI flag overrides
//!
//! Later layers win field by field.

use std::fs;
use std::path::{Path, PathBuf};

use civic_lib::render::DEFAULT_MAP_SEARCH_BASE;
use civic_lib::session::DEFAULT_NOTICE_SECS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::BackendKind;

/// Workspace directory name.
pub const WORKSPACE_DIR: &str = ".civic";

/// Config file name inside a config directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Longest allowed success-notice lifetime: one day.
pub const MAX_NOTICE_SECS: i64 = 86_400;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid {var}: {reason}")]
    Env { var: &'static str, reason: String },
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Directory holding the durable store.
    pub data_dir: PathBuf,
    pub backend: BackendKind,
    /// Lifetime of the success notice, in seconds.
    pub notice_seconds: i64,
    /// Map search endpoint; the urlencoded location is appended.
    pub map_search_base: String,
}

impl Config {
    /// Built-in defaults relative to `root`.
    #[must_use]
    pub fn defaults(root: &Path) -> Self {
        Self {
            data_dir: root.join(WORKSPACE_DIR).join("data"),
            backend: BackendKind::default(),
            notice_seconds: DEFAULT_NOTICE_SECS,
            map_search_base: DEFAULT_MAP_SEARCH_BASE.to_string(),
        }
    }

    fn apply(&mut self, layer: ConfigLayer, base: &Path) {
        if let Some(dir) = layer.data_dir {
            self.data_dir = if dir.is_absolute() { dir } else { base.join(dir) };
        }
        if let Some(backend) = layer.backend {
            self.backend = backend;
        }
        if let Some(secs) = layer.notice_seconds {
            self.notice_seconds = secs.clamp(0, MAX_NOTICE_SECS);
        }
        if let Some(base_url) = layer.map_search_base {
            self.map_search_base = base_url;
        }
    }
}

/// One partially specified layer, as found in a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub data_dir: Option<PathBuf>,
    pub backend: Option<BackendKind>,
    pub notice_seconds: Option<i64>,
    pub map_search_base: Option<String>,
}

impl ConfigLayer {
    /// Read a layer from `path`; a missing file is an empty layer.
    ///
    /// # Errors
    ///
    /// Returns `Read` on I/O failure or `Parse` on invalid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer from an environment lookup (`std::env::var` in production).
    ///
    /// # Errors
    ///
    /// Returns `Env` if `CIVIC_BACKEND` names an unknown backend.
    pub fn from_env<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("CIVIC_BACKEND")
            .map(|v| {
                v.parse::<BackendKind>().map_err(|reason| ConfigError::Env {
                    var: "CIVIC_BACKEND",
                    reason,
                })
            })
            .transpose()?;
        Ok(Self {
            data_dir: lookup("CIVIC_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            backend,
            ..Self::default()
        })
    }
}

/// Overrides taken from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub backend: Option<BackendKind>,
}

impl From<CliOverrides> for ConfigLayer {
    fn from(cli: CliOverrides) -> Self {
        Self {
            data_dir: cli.data_dir,
            backend: cli.backend,
            ..Self::default()
        }
    }
}

/// User-level config file, if a home directory is known.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("civic").join(CONFIG_FILE));
    }
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("civic").join(CONFIG_FILE))
}

/// Resolve the effective configuration for a workspace rooted at `root`.
///
/// # Errors
///
/// Returns a `ConfigError` if any layer cannot be read or parsed.
pub fn load(root: &Path, cli: CliOverrides) -> Result<Config, ConfigError> {
    load_with(
        root,
        user_config_path().as_deref(),
        |var| std::env::var(var).ok(),
        cli,
    )
}

/// [`load`] with the user config path and environment injected.
///
/// # Errors
///
/// Returns a `ConfigError` if any layer cannot be read or parsed.
pub fn load_with<F>(
    root: &Path,
    user_config: Option<&Path>,
    env: F,
    cli: CliOverrides,
) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let mut config = Config::defaults(&root);

    if let Some(path) = user_config {
        let base = path.parent().unwrap_or(&root).to_path_buf();
        config.apply(ConfigLayer::from_file(path)?, &base);
    }

    let workspace = root.join(WORKSPACE_DIR);
    config.apply(
        ConfigLayer::from_file(&workspace.join(CONFIG_FILE))?,
        &workspace,
    );

    config.apply(ConfigLayer::from_env(env)?, &root);
    config.apply(cli.into(), &root);

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        backend = %config.backend,
        "resolved configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_with(dir.path(), None, no_env, CliOverrides::default()).unwrap();
        assert!(config.data_dir.ends_with(".civic/data"));
        assert_eq!(config.backend, BackendKind::File);
        assert_eq!(config.notice_seconds, 2);
        assert_eq!(config.map_search_base, DEFAULT_MAP_SEARCH_BASE);
    }

    #[test]
    fn workspace_file_overrides_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.yaml");
        fs::write(&user, "backend: sqlite\nnotice_seconds: 5\n").unwrap();
        fs::create_dir_all(dir.path().join(WORKSPACE_DIR)).unwrap();
        fs::write(
            dir.path().join(WORKSPACE_DIR).join(CONFIG_FILE),
            "notice_seconds: 9\ndata_dir: store\n",
        )
        .unwrap();

        let config = load_with(dir.path(), Some(&user), no_env, CliOverrides::default()).unwrap();
        assert_eq!(config.backend, BackendKind::Sqlite);
        assert_eq!(config.notice_seconds, 9);
        assert!(config.data_dir.ends_with(".civic/store"));
    }

    #[test]
    fn notice_seconds_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.yaml");

        fs::write(&user, "notice_seconds: 10000000000000000\n").unwrap();
        let config = load_with(dir.path(), Some(&user), no_env, CliOverrides::default()).unwrap();
        assert_eq!(config.notice_seconds, MAX_NOTICE_SECS);

        fs::write(&user, "notice_seconds: -5\n").unwrap();
        let config = load_with(dir.path(), Some(&user), no_env, CliOverrides::default()).unwrap();
        assert_eq!(config.notice_seconds, 0);
    }

    #[test]
    fn env_then_cli_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let env = |var: &str| match var {
            "CIVIC_BACKEND" => Some("memory".to_string()),
            "CIVIC_DATA_DIR" => Some("/tmp/civic-env".to_string()),
            _ => None,
        };
        let config = load_with(dir.path(), None, env, CliOverrides::default()).unwrap();
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/civic-env"));

        let cli = CliOverrides {
            data_dir: None,
            backend: Some(BackendKind::File),
        };
        let config = load_with(dir.path(), None, env, cli).unwrap();
        assert_eq!(config.backend, BackendKind::File);
    }

    #[test]
    fn bad_env_backend_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let env = |var: &str| (var == "CIVIC_BACKEND").then(|| "redis".to_string());
        let err = load_with(dir.path(), None, env, CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Env { .. }));
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.yaml");
        fs::write(&user, "colour: blue\n").unwrap();
        let err = load_with(dir.path(), Some(&user), no_env, CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
