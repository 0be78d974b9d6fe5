// File: client/src/transfer/status.rs
use serde::{Deserialize, Deserializer};

use crate::constants::state;

/// The server sends `null` for fields it has nothing to say about; treat
/// those the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET {handle}?attributes=*`
#[derive(Debug, Clone, Deserialize)]
pub struct TransferQueryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub transfer: Vec<TransferRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: StateBlock,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transfer_set: TransferSetRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferSetRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: StateBlock,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StateBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl StateBlock {
    pub fn is_successful(&self) -> bool {
        self.state.eq_ignore_ascii_case(state::SUCCESSFUL)
    }
}

/// Outcome of one transfer as reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStatus {
    pub id: String,
    pub overall: StateBlock,
    pub items: Vec<StateBlock>,
}

impl TransferStatus {
    /// Only the first transfer in the response is considered.
    pub fn from_response(response: TransferQueryResponse) -> Option<Self> {
        let record = response.transfer.into_iter().next()?;
        Some(Self {
            id: record.id,
            overall: record.status,
            items: record
                .transfer_set
                .item
                .into_iter()
                .map(|item| item.status)
                .collect(),
        })
    }

    pub fn is_successful(&self) -> bool {
        self.overall.is_successful()
    }

    /// Descriptions of every item that did not succeed, in response order.
    /// Empty when the transfer as a whole succeeded.
    pub fn failed_item_descriptions(&self) -> Vec<&str> {
        if self.is_successful() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| !item.is_successful())
            .map(|item| item.description.as_str())
            .collect()
    }
}
