// File: client/src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

use crate::constants::defaults;

/// Everything the client needs to submit and track one transfer.
///
/// Any field missing from the TOML file falls back to the built-in default,
/// so an absent or partial file still produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "ConfigFile")]
pub struct Config {
    /// Transfer submission endpoint of the MQ web server
    pub transfer_url: String,
    pub user_id: String,
    pub password: String,
    pub source_agent: AgentConfig,
    pub destination_agent: AgentConfig,
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
    pub qmgr_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemConfig {
    pub source: PathConfig,
    pub destination: PathConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Whether a transfer item names a single file or a directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    File,
    Directory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transfer_url: defaults::TRANSFER_URL.to_string(),
            user_id: defaults::USER_ID.to_string(),
            password: defaults::PASSWORD.to_string(),
            source_agent: AgentConfig {
                name: defaults::SOURCE_AGENT_NAME.to_string(),
                qmgr_name: defaults::SOURCE_QMGR_NAME.to_string(),
            },
            destination_agent: AgentConfig {
                name: defaults::DESTINATION_AGENT_NAME.to_string(),
                qmgr_name: defaults::DESTINATION_QMGR_NAME.to_string(),
            },
            items: vec![ItemConfig {
                source: PathConfig {
                    name: defaults::SOURCE_ITEM_NAME.to_string(),
                    item_type: ItemType::File,
                },
                destination: PathConfig {
                    name: defaults::DESTINATION_ITEM_NAME.to_string(),
                    item_type: ItemType::Directory,
                },
            }],
        }
    }
}

/// On-disk shape of the config file. Every key is optional; whatever is left
/// out is taken from [`Config::default`], field by field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    transfer_url: Option<String>,
    user_id: Option<String>,
    password: Option<String>,
    source_agent: AgentFile,
    destination_agent: AgentFile,
    items: Option<Vec<ItemFile>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AgentFile {
    name: Option<String>,
    qmgr_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemFile {
    source: PathFile,
    destination: PathFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PathFile {
    name: Option<String>,
    #[serde(rename = "type")]
    item_type: Option<ItemType>,
}

impl AgentFile {
    fn over(self, base: AgentConfig) -> AgentConfig {
        AgentConfig {
            name: self.name.unwrap_or(base.name),
            qmgr_name: self.qmgr_name.unwrap_or(base.qmgr_name),
        }
    }
}

impl PathFile {
    fn over(self, base: &PathConfig) -> PathConfig {
        PathConfig {
            name: self.name.unwrap_or_else(|| base.name.clone()),
            item_type: self.item_type.unwrap_or(base.item_type),
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let defaults = Config::default();
        // Items left incomplete borrow the missing half from the default item
        let base_item = defaults.items[0].clone();

        Self {
            transfer_url: file.transfer_url.unwrap_or(defaults.transfer_url),
            user_id: file.user_id.unwrap_or(defaults.user_id),
            password: file.password.unwrap_or(defaults.password),
            source_agent: file.source_agent.over(defaults.source_agent),
            destination_agent: file.destination_agent.over(defaults.destination_agent),
            items: match file.items {
                Some(items) => items
                    .into_iter()
                    .map(|item| ItemConfig {
                        source: item.source.over(&base_item.source),
                        destination: item.destination.over(&base_item.destination),
                    })
                    .collect(),
                None => defaults.items,
            },
        }
    }
}
