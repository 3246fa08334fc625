//! Create/update payloads and their form validation.
//!
//! Drafts hold what the user typed. `validate()` reports every failing field
//! at once; a draft that fails validation must never be sent to the server.
//! Serialized field names follow the API (`contract_name`, `meeting_date`).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::entities::{ContractRecord, ContractRef, MeetingRecord};
use crate::enums::{
    ContractStatus, DEFAULT_CONTRACT_TYPE, DEFAULT_MEETING_MINUTES, MeetingStatus,
    canonical_contract_type,
};
use crate::errors::{FieldError, ValidationError};
use crate::wire::parse_amount;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// ---------------------------------------------------------------------------
// ContractDraft
// ---------------------------------------------------------------------------

/// Contract create/edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDraft {
    #[serde(rename = "contract_name")]
    pub name: String,
    pub contract_type: String,
    #[serde(rename = "client_name")]
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    /// Contract value as typed; sent as entered once validated.
    pub amount: String,
    pub description: String,
    pub status: ContractStatus,
}

impl Default for ContractDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            contract_type: DEFAULT_CONTRACT_TYPE.to_string(),
            client: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            amount: String::new(),
            description: String::new(),
            status: ContractStatus::Pending,
        }
    }
}

impl ContractDraft {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing each field that is missing or invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        require(&mut errors, "name", &self.name);
        require(&mut errors, "client", &self.client);
        require(&mut errors, "description", &self.description);

        if canonical_contract_type(&self.contract_type).is_none() {
            errors.push(FieldError::new(
                "contract_type",
                format!("unknown contract type '{}'", self.contract_type.trim()),
            ));
        }

        let start = date_field(&mut errors, "start_date", &self.start_date);
        let end = date_field(&mut errors, "end_date", &self.end_date);
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            errors.push(FieldError::new("end_date", "must not be before the start date"));
        }

        if self.amount.trim().is_empty() {
            errors.push(FieldError::new("amount", "is required"));
        } else {
            match parse_amount(&self.amount) {
                Some(value) if value >= 0.0 => {}
                Some(_) => errors.push(FieldError::new("amount", "must not be negative")),
                None => errors.push(FieldError::new("amount", "must be a number")),
            }
        }

        finish(errors)
    }

    /// Trimmed copy with the contract type in its canonical spelling and the
    /// amount reduced to a plain number (`"$150,000"` becomes `"150000"`).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contract_type: canonical_contract_type(&self.contract_type)
                .map_or_else(|| self.contract_type.trim().to_string(), str::to_string),
            client: self.client.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            amount: parse_amount(&self.amount)
                .map_or_else(|| self.amount.trim().to_string(), |value| value.to_string()),
            description: self.description.trim().to_string(),
            status: self.status,
        }
    }
}

// ---------------------------------------------------------------------------
// MeetingDraft
// ---------------------------------------------------------------------------

/// Meeting create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub contract_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub meeting_date: String,
    pub meeting_time: String,
    /// Minutes.
    pub duration: u32,
    pub status: MeetingStatus,
}

impl Default for MeetingDraft {
    fn default() -> Self {
        Self {
            contract_id: String::new(),
            title: String::new(),
            description: String::new(),
            meeting_date: String::new(),
            meeting_time: String::new(),
            duration: DEFAULT_MEETING_MINUTES,
            status: MeetingStatus::Scheduled,
        }
    }
}

impl MeetingDraft {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing each field that is missing or invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.contract_id.trim().is_empty() {
            errors.push(FieldError::new("contract_id", "select a contract"));
        }
        require(&mut errors, "title", &self.title);
        date_field(&mut errors, "meeting_date", &self.meeting_date);

        let time = self.meeting_time.trim();
        if time.is_empty() {
            errors.push(FieldError::new("meeting_time", "is required"));
        } else if NaiveTime::parse_from_str(time, TIME_FORMAT).is_err() {
            errors.push(FieldError::new("meeting_time", "must be HH:MM"));
        }

        if self.duration == 0 {
            errors.push(FieldError::new("duration", "must be greater than 0"));
        }

        finish(errors)
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// # Errors
    ///
    /// Returns [`ValidationError`] when username or password is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "username", &self.username);
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "is required"));
        }
        finish(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a blank field or an email without `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "username", &self.username);
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "is required"));
        } else if !email.contains('@') {
            errors.push(FieldError::new("email", "must be an email address"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "is required"));
        }
        finish(errors)
    }
}

// ---------------------------------------------------------------------------
// Prefill from existing records (edit forms)
// ---------------------------------------------------------------------------

impl From<&ContractRecord> for ContractDraft {
    fn from(record: &ContractRecord) -> Self {
        Self {
            name: record.contract_name.clone().unwrap_or_default(),
            contract_type: record
                .contract_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTRACT_TYPE.to_string()),
            client: record.client_name.clone().unwrap_or_default(),
            start_date: day_part(record.start_date.as_deref()),
            end_date: day_part(record.end_date.as_deref()),
            amount: record.amount.map(|a| a.to_string()).unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            status: record.known_status().unwrap_or(ContractStatus::Pending),
        }
    }
}

impl From<&MeetingRecord> for MeetingDraft {
    fn from(record: &MeetingRecord) -> Self {
        Self {
            contract_id: record
                .contract_id
                .as_ref()
                .and_then(ContractRef::id)
                .unwrap_or_default()
                .to_string(),
            title: record.title.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            meeting_date: day_part(record.meeting_date.as_deref()),
            meeting_time: record.meeting_time.clone().unwrap_or_default(),
            duration: record.duration.unwrap_or(DEFAULT_MEETING_MINUTES),
            status: record.known_status().unwrap_or(MeetingStatus::Scheduled),
        }
    }
}

/// `2025-01-15T00:00:00.000Z` → `2025-01-15`.
fn day_part(raw: Option<&str>) -> String {
    let raw = raw.unwrap_or_default().trim();
    raw.split_once('T').map_or(raw, |(day, _)| day).to_string()
}

// --- helpers ---

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
}

fn date_field(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "must be YYYY-MM-DD"));
            None
        }
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields: errors })
    }
}
