//! Raw API records → uniform display rows.
//!
//! Mapping is pure and total over optional fields: anything missing renders
//! as the `—` placeholder. The only failure is a record without an
//! identifier, which is reported and dropped from display.

use std::fmt;

use desk_core::PLACEHOLDER;
use desk_core::entities::{ContractRecord, MeetingRecord};
use desk_core::enums::{ContractStatus, DEFAULT_MEETING_MINUTES, MeetingStatus};
use serde::Serialize;

use crate::error::MappingError;
use crate::format::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Contract,
    Meeting,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Meeting => "meeting",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color class for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Danger,
    Warning,
    Info,
    Neutral,
}

impl StatusTone {
    /// Tone for a raw status string, case-insensitive. Unknown → neutral.
    #[must_use]
    pub fn for_status(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Neutral;
        };
        if let Some(status) = ContractStatus::parse(raw) {
            return match status {
                ContractStatus::Active => Self::Success,
                ContractStatus::Expired => Self::Danger,
                ContractStatus::Pending => Self::Warning,
            };
        }
        match MeetingStatus::parse(raw) {
            Some(MeetingStatus::Scheduled) => Self::Info,
            Some(MeetingStatus::Ongoing) => Self::Success,
            Some(MeetingStatus::Completed) | None => Self::Neutral,
        }
    }
}

/// One row of a contracts or meetings list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub kind: RecordKind,
    /// Contract name or meeting title.
    pub title: String,
    /// Client name (contracts) or host (meetings).
    pub subtitle: String,
    /// Contract type (contracts) or meeting time (meetings).
    pub kind_label: String,
    /// Formatted amount (contracts) or duration (meetings).
    pub figure: String,
    /// Start date (contracts) or meeting date (meetings).
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Status as shown; contracts without a known status show `Pending`.
    pub status: String,
    /// Status exactly as the server sent it.
    pub raw_status: Option<String>,
    pub tone: StatusTone,
    pub description: String,
    /// Name of the related contract (meetings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Map a contract.
///
/// # Errors
///
/// Returns [`MappingError::MissingIdentifier`] when the record has no id.
pub fn map_contract(record: &ContractRecord, fmt: &Formatter) -> Result<DisplayRecord, MappingError> {
    let id = record
        .identifier()
        .ok_or(MappingError::MissingIdentifier {
            kind: RecordKind::Contract,
        })?;
    let status = record.known_status().unwrap_or(ContractStatus::Pending);

    Ok(DisplayRecord {
        id: id.to_string(),
        kind: RecordKind::Contract,
        title: text_or_placeholder(record.contract_name.as_deref()),
        subtitle: text_or_placeholder(record.client_name.as_deref()),
        kind_label: text_or_placeholder(record.contract_type.as_deref()),
        figure: fmt.amount(record.amount),
        date: fmt.date(record.start_date.as_deref()),
        end_date: Some(fmt.date(record.end_date.as_deref())),
        status: status.as_str().to_string(),
        raw_status: record.status.clone(),
        tone: StatusTone::for_status(record.status.as_deref()),
        description: record.description.clone().unwrap_or_default(),
        context: None,
    })
}

/// Map a meeting. Host falls back from username to email to `—`; duration
/// defaults to 30 minutes.
///
/// # Errors
///
/// Returns [`MappingError::MissingIdentifier`] when the record has no id.
pub fn map_meeting(record: &MeetingRecord, fmt: &Formatter) -> Result<DisplayRecord, MappingError> {
    let id = record
        .identifier()
        .ok_or(MappingError::MissingIdentifier {
            kind: RecordKind::Meeting,
        })?;

    let host = record
        .created_by
        .as_ref()
        .and_then(|user| user.display_name());
    let status = match (record.known_status(), record.status.as_deref()) {
        (Some(known), _) => known.as_str().to_string(),
        (None, raw) => text_or_placeholder(raw),
    };
    let day = record.meeting_date.as_deref().map(iso_day);

    Ok(DisplayRecord {
        id: id.to_string(),
        kind: RecordKind::Meeting,
        title: text_or_placeholder(record.title.as_deref()),
        subtitle: text_or_placeholder(host),
        kind_label: text_or_placeholder(record.meeting_time.as_deref()),
        figure: Formatter::minutes(record.duration.unwrap_or(DEFAULT_MEETING_MINUTES)),
        date: fmt.date(day),
        end_date: None,
        status,
        raw_status: record.status.clone(),
        tone: StatusTone::for_status(record.status.as_deref()),
        description: record.description.clone().unwrap_or_default(),
        context: record
            .contract_id
            .as_ref()
            .and_then(|contract| contract.contract_name())
            .map(str::to_string),
    })
}

/// Map a batch, keeping source order. Unmappable records are dropped,
/// logged, and returned alongside the rows.
pub fn map_contracts(
    records: &[ContractRecord],
    fmt: &Formatter,
) -> (Vec<DisplayRecord>, Vec<MappingError>) {
    map_batch(records, |r| map_contract(r, fmt))
}

/// See [`map_contracts`].
pub fn map_meetings(
    records: &[MeetingRecord],
    fmt: &Formatter,
) -> (Vec<DisplayRecord>, Vec<MappingError>) {
    map_batch(records, |r| map_meeting(r, fmt))
}

fn map_batch<R>(
    records: &[R],
    map: impl Fn(&R) -> Result<DisplayRecord, MappingError>,
) -> (Vec<DisplayRecord>, Vec<MappingError>) {
    let mut rows = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match map(record) {
            Ok(row) => rows.push(row),
            Err(error) => {
                tracing::warn!(index, %error, "dropping record from display");
                errors.push(error);
            }
        }
    }
    (rows, errors)
}

/// Leading `YYYY-MM-DD` of an ISO timestamp; shorter input is returned as is.
fn iso_day(raw: &str) -> &str {
    let raw = raw.trim();
    raw.get(..10).unwrap_or(raw)
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
