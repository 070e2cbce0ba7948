use crate::catalog::DEFAULT_BORROW_LIMIT;
use crate::error::{BiblioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_NAME: &str = "Community Library";

/// Configuration for biblio, stored as config.json in the platform config
/// directory. Lending state itself is never persisted; this covers session
/// settings only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BiblioConfig {
    /// Display name of the library, shown in the shell banner
    #[serde(default = "default_library_name")]
    pub library_name: String,

    /// How many books one patron may hold at once
    #[serde(default = "default_borrow_limit")]
    pub borrow_limit: usize,
}

fn default_library_name() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

fn default_borrow_limit() -> usize {
    DEFAULT_BORROW_LIMIT
}

impl Default for BiblioConfig {
    fn default() -> Self {
        Self {
            library_name: default_library_name(),
            borrow_limit: DEFAULT_BORROW_LIMIT,
        }
    }
}

impl BiblioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BiblioError::Io)?;
        let config: BiblioConfig =
            serde_json::from_str(&content).map_err(BiblioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BiblioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BiblioError::Serialization)?;
        fs::write(config_path, content).map_err(BiblioError::Io)?;
        Ok(())
    }

    /// Set the borrow limit (a zero limit would brick every card; clamp to 1)
    pub fn set_borrow_limit(&mut self, limit: usize) {
        self.borrow_limit = limit.max(1);
    }
}
