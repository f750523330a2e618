//! Config loading and persistence: global file under the user config
//! directory, layered with NIMBUS_* environment overrides.

use super::NimbusConfig;
use crate::error::ApiError;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file path. NIMBUS_CONFIG_DIR overrides the user
    /// config directory (tests rely on this).
    pub fn default_path() -> Result<PathBuf, ApiError> {
        if let Ok(dir) = std::env::var("NIMBUS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        let dirs = ProjectDirs::from("", "", "nimbus").ok_or_else(|| {
            ApiError::ConfigError("Could not determine user config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load from the default path.
    pub fn load() -> Result<NimbusConfig, ApiError> {
        Self::load_from_file(&Self::default_path()?)
    }

    /// Load from an explicit file path. A missing file yields the default
    /// configuration; environment overrides apply either way. Nested keys
    /// use a double underscore, e.g. NIMBUS_TARGET__TOKEN.
    pub fn load_from_file(path: &Path) -> Result<NimbusConfig, ApiError> {
        let mut builder = Config::builder();
        if path.exists() {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        let settings = builder
            .add_source(Environment::with_prefix("NIMBUS").separator("__"))
            .build()?;
        settings.try_deserialize().map_err(ApiError::from)
    }

    /// Persist the configuration, creating parent directories as needed.
    pub fn save(config: &NimbusConfig, path: &Path) -> Result<(), ApiError> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| ApiError::ConfigError(format!("Failed to write config: {}", e)))
    }
}
