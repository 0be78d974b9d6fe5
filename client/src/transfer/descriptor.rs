// File: client/src/transfer/descriptor.rs
use serde::{Deserialize, Serialize};

use crate::config::{AgentConfig, Config, ItemConfig, ItemType, PathConfig};

/// Transfer request body for `POST /admin/mft/transfer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferDescriptor {
    pub source_agent: AgentRef,
    pub destination_agent: AgentRef,
    pub transfer_set: TransferSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentRef {
    pub qmgr_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferSet {
    pub item: Vec<TransferItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferItem {
    pub source: ItemRef,
    pub destination: ItemRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRef {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl From<&AgentConfig> for AgentRef {
    fn from(agent: &AgentConfig) -> Self {
        Self {
            qmgr_name: agent.qmgr_name.clone(),
            name: agent.name.clone(),
        }
    }
}

impl From<&PathConfig> for ItemRef {
    fn from(path: &PathConfig) -> Self {
        Self {
            name: path.name.clone(),
            item_type: path.item_type,
        }
    }
}

impl From<&ItemConfig> for TransferItem {
    fn from(item: &ItemConfig) -> Self {
        Self {
            source: ItemRef::from(&item.source),
            destination: ItemRef::from(&item.destination),
        }
    }
}

/// Build the transfer request for the configured agents and items
pub fn build_transfer_descriptor(config: &Config) -> TransferDescriptor {
    TransferDescriptor {
        source_agent: AgentRef::from(&config.source_agent),
        destination_agent: AgentRef::from(&config.destination_agent),
        transfer_set: TransferSet {
            item: config.items.iter().map(TransferItem::from).collect(),
        },
    }
}
