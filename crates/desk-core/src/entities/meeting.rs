use serde::{Deserialize, Serialize};

use crate::entities::{ContractRef, UserRef};
use crate::enums::MeetingStatus;
use crate::wire;

/// A meeting exactly as the API returned it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MeetingRecord {
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
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date or timestamp (`2026-02-20` / `2026-02-20T00:00:00.000Z`).
    #[serde(default)]
    pub meeting_date: Option<String>,
    /// `HH:MM`.
    #[serde(default)]
    pub meeting_time: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "wire::opt_minutes")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contract_id: Option<ContractRef>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
}

impl MeetingRecord {
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }

    #[must_use]
    pub fn known_status(&self) -> Option<MeetingStatus> {
        self.status.as_deref().and_then(MeetingStatus::parse)
    }
}
