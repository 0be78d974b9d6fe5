// File: client/src/config/manager.rs
//! Loader for the client configuration file.
//!
//! Example client.toml:
//! ```toml
//! transfer_url = "http://mqweb:9080/ibmmq/rest/v2/admin/mft/transfer"
//! user_id = "mftadmin"
//! password = "secret"
//!
//! [source_agent]
//! name = "SRC"
//! qmgr_name = "SRCQM"
//!
//! [destination_agent]
//! name = "DEST"
//! qmgr_name = "DESTQM"
//!
//! [[items]]
//! source = { name = "/usr/srcdir", type = "file" }
//! destination = { name = "/usr/destdir", type = "directory" }
//! ```

use super::Config;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    /// Load configuration from the given file.
    /// Falls back to the built-in defaults if the file doesn't exist.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = Self::load_configuration(config_path)?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    fn load_configuration(config_path: &Path) -> Result<Config> {
        if !config_path.exists() {
            warn!(
                "Config file not found at {:?}, using built-in defaults",
                config_path
            );
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        info!(
            "Loaded config from {:?}: {} -> {}, {} item(s)",
            config_path,
            config.source_agent.name,
            config.destination_agent.name,
            config.items.len()
        );

        Ok(config)
    }
}
