use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// TOML catalog of entries to browse.
    pub catalog_path: PathBuf,
    /// Directory that `img:@name` references resolve against. Defaults to the
    /// catalog's own directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_path: Option<PathBuf>,
}

impl Config {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            assets_path: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.expand_paths();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/onomato");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Asset directory, falling back to the directory holding the catalog.
    pub fn assets_dir(&self) -> PathBuf {
        match &self.assets_path {
            Some(path) => path.clone(),
            None => self
                .catalog_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    // Expand shell variables and tilde; unexpandable paths are kept as written
    fn expand_paths(&mut self) {
        if let Some(expanded) = Self::expand_path(&self.catalog_path) {
            self.catalog_path = expanded;
        }
        if let Some(assets) = &self.assets_path {
            self.assets_path = Some(Self::expand_path(assets).unwrap_or_else(|| assets.clone()));
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
