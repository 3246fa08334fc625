//! Status and role enums for contractdesk.
//!
//! Contract statuses serialize the way the API stores them (`"Active"`),
//! meeting statuses are lowercase (`"scheduled"`). Every enum offers a
//! lenient, case-insensitive `parse` that returns `None` for unknown input so
//! callers decide their own fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContractStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a contract.
///
/// ```text
/// Pending → Active → Expired
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Expired,
    Pending,
}

impl ContractStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Expired, Self::Pending];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Pending => "Pending",
        }
    }

    /// Case-insensitive parse. `None` for empty or unknown input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MeetingStatus
// ---------------------------------------------------------------------------

/// Status of a meeting.
///
/// ```text
/// scheduled → ongoing → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl MeetingStatus {
    pub const ALL: [Self; 3] = [Self::Scheduled, Self::Ongoing, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContractType
// ---------------------------------------------------------------------------

/// Contract types offered by the create/edit forms.
pub const CONTRACT_TYPES: [&str; 6] = [
    "Service Contract",
    "Vendor Contract",
    "Employment Contract",
    "Partnership Agreement",
    "Lease Agreement",
    "Other",
];

/// Default contract type preselected on the create form.
pub const DEFAULT_CONTRACT_TYPE: &str = "Service Contract";

/// Canonical spelling of a contract type, matched case-insensitively.
#[must_use]
pub fn canonical_contract_type(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    CONTRACT_TYPES
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(raw))
}

/// Meeting durations (minutes) offered by the meeting form.
pub const MEETING_DURATIONS: [u32; 6] = [15, 30, 45, 60, 90, 120];

/// Duration assumed when a meeting record or draft carries none.
pub const DEFAULT_MEETING_MINUTES: u32 = 30;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Authenticated role. Exactly one role is privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Resolve a raw role string. Absent, empty or unrecognized values fall
    /// back to the non-privileged [`Role::User`].
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
