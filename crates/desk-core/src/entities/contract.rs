use serde::{Deserialize, Serialize};

use crate::enums::ContractStatus;
use crate::wire;

/// A contract exactly as the API returned it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContractRecord {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "wire::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_amount")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Stored verbatim. Unknown or empty values are never rewritten here.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ContractRecord {
    /// The record identifier: `_id` when present, otherwise `id`.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }

    /// The recognized status, or `None` when missing or unknown.
    #[must_use]
    pub fn known_status(&self) -> Option<ContractStatus> {
        self.status.as_deref().and_then(ContractStatus::parse)
    }
}
