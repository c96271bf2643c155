//! Configuration
//!
//! # Loading priority
//!
//! 1. Explicit config file path (CLI `--config`)
//! 2. `TXTDIR_CONFIG` environment variable
//! 3. `config.toml` in the platform config directory, if present
//! 4. Built-in defaults
//!
//! The base directory can additionally be overridden by `TXTDIR_BASE_DIR`,
//! and by the caller when building a resolver.
//!
//! A relative `base_dir` read from a file is taken relative to that file's
//! directory. Relative values from the environment or the caller are left
//! as given and resolve against the current directory.

use crate::error::{TxtError, TxtResult};
use crate::resolver::DataDirResolver;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "TXTDIR_CONFIG";
pub const BASE_DIR_ENV: &str = "TXTDIR_BASE_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TxtdirConfig {
    /// Directory the data path is resolved from
    pub base_dir: Option<PathBuf>,
    /// Offset from the base directory to the data directory
    pub data_relative: Option<PathBuf>,
}

impl TxtdirConfig {
    pub fn from_toml_str(s: &str) -> TxtResult<Self> {
        toml::from_str(s).map_err(|e| TxtError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> TxtResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TxtError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_toml_str(&raw)?;

        if let (Some(base), Some(dir)) = (config.base_dir.as_ref(), path.parent()) {
            if base.is_relative() {
                config.base_dir = Some(dir.join(base));
            }
        }
        Ok(config)
    }

    /// `config.toml` under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "txtdir", "txtdir")
            .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load using the process environment.
    pub fn load(explicit: Option<&Path>) -> TxtResult<Self> {
        Self::load_with(explicit, Self::default_path(), |key| std::env::var(key).ok())
    }

    /// Load with an injected environment lookup and default file location.
    pub fn load_with<F>(explicit: Option<&Path>, default_path: Option<PathBuf>, env: F) -> TxtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
            Self::from_file(path)?
        } else {
            match default_path.filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            }
        };

        if let Some(base) = env(BASE_DIR_ENV).filter(|b| !b.is_empty()) {
            config.base_dir = Some(PathBuf::from(base));
        }

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Build a resolver. `base_override` wins over the configured base; with
    /// neither, the build-time source location is used.
    pub fn resolver(&self, base_override: Option<&Path>) -> TxtResult<DataDirResolver> {
        let resolver = match base_override.or(self.base_dir.as_deref()) {
            Some(base) => DataDirResolver::new(base),
            None => DataDirResolver::from_source_location()?,
        };
        Ok(match &self.data_relative {
            Some(relative) => resolver.with_relative(relative),
            None => resolver,
        })
    }
}
