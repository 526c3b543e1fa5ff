use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{get_global_config_dir, Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Locates and reads the configuration file
pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Search `./salesboard.toml`, then the user config directory
    pub fn new() -> Self {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Ok(global_dir) = get_global_config_dir() {
            search_paths.push(global_dir.join("config.toml"));
        }
        Self { search_paths }
    }

    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load configuration and apply environment overrides
    ///
    /// An explicit path must exist. Without one, the first existing search
    /// path is used, and defaults apply when none exists.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        let mut config = match explicit {
            Some(path) => {
                if !fs::try_exists(path).await? {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::read(path).await?
            }
            None => match self.first_existing().await? {
                Some(path) => Self::read(&path).await?,
                None => {
                    debug!("No config file found, using defaults");
                    Config::new()
                }
            },
        };

        config.merge_env_vars();
        Ok(config)
    }

    async fn first_existing(&self) -> Result<Option<PathBuf>> {
        for path in &self.search_paths {
            if fs::try_exists(path).await? {
                return Ok(Some(path.clone()));
            }
        }
        Ok(None)
    }

    async fn read(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
