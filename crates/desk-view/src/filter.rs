//! Filter Engine: text query + status category over display rows.
//!
//! Filtering is stable (source order is kept). Category counts are always
//! computed over the unfiltered rows so tab labels show true totals.

use desk_core::PLACEHOLDER;
use desk_core::enums::{ContractStatus, MeetingStatus};
use serde::Serialize;

use crate::mapper::DisplayRecord;

/// Row fields a text query can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
    KindLabel,
    Subtitle,
}

impl SearchField {
    /// The searchable text, or `None` when the field is missing and the row
    /// only shows the placeholder.
    fn value(self, record: &DisplayRecord) -> Option<&str> {
        let text = match self {
            Self::Title => &record.title,
            Self::Description => &record.description,
            Self::KindLabel => &record.kind_label,
            Self::Subtitle => &record.subtitle,
        };
        (text != PLACEHOLDER).then_some(text.as_str())
    }
}

/// A fixed set of status tabs with an "all" sentinel as its default.
pub trait Category: Copy + Eq + Default + 'static {
    /// Every member, in tab order, sentinel first.
    const ALL: &'static [Self];

    /// Fields searched by the text query on lists using this category set.
    const SEARCH_FIELDS: &'static [SearchField];

    fn label(self) -> &'static str;

    /// Whether a row belongs to this tab.
    fn matches(self, record: &DisplayRecord) -> bool;

    /// Parse user input (case-insensitive, trimmed). Unknown input fails
    /// closed to the sentinel.
    #[must_use]
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Category sets
// ---------------------------------------------------------------------------

/// Contract status tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ContractCategory {
    #[default]
    All,
    Status(ContractStatus),
}

impl Category for ContractCategory {
    const ALL: &'static [Self] = &[
        Self::All,
        Self::Status(ContractStatus::Active),
        Self::Status(ContractStatus::Expired),
        Self::Status(ContractStatus::Pending),
    ];

    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Title,
        SearchField::Description,
        SearchField::KindLabel,
        SearchField::Subtitle,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Status(status) => status.as_str(),
        }
    }

    fn matches(self, record: &DisplayRecord) -> bool {
        match self {
            Self::All => true,
            // rows already carry the Pending display default
            Self::Status(status) => record.status == status.as_str(),
        }
    }

    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") || raw.eq_ignore_ascii_case("all status") {
            return Self::All;
        }
        ContractStatus::parse(raw).map_or(Self::All, Self::Status)
    }
}

/// Meeting status tabs on the administrative meetings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MeetingCategory {
    #[default]
    All,
    Status(MeetingStatus),
}

impl Category for MeetingCategory {
    const ALL: &'static [Self] = &[
        Self::All,
        Self::Status(MeetingStatus::Scheduled),
        Self::Status(MeetingStatus::Ongoing),
        Self::Status(MeetingStatus::Completed),
    ];

    const SEARCH_FIELDS: &'static [SearchField] = &[SearchField::Title, SearchField::Description];

    fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Status(status) => status.as_str(),
        }
    }

    fn matches(self, record: &DisplayRecord) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => MeetingStatus::parse(&record.status) == Some(status),
        }
    }
}

/// Meeting tabs on the attendee view. Completed meetings only show under "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeCategory {
    #[default]
    All,
    Upcoming,
    Live,
}

impl Category for AttendeeCategory {
    const ALL: &'static [Self] = &[Self::All, Self::Upcoming, Self::Live];

    const SEARCH_FIELDS: &'static [SearchField] = &[SearchField::Title, SearchField::Description];

    fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Live => "live",
        }
    }

    fn matches(self, record: &DisplayRecord) -> bool {
        let status = MeetingStatus::parse(&record.status);
        match self {
            Self::All => true,
            Self::Upcoming => status == Some(MeetingStatus::Scheduled),
            Self::Live => status == Some(MeetingStatus::Ongoing),
        }
    }

    fn parse(raw: &str) -> Self {
        match MeetingStatus::parse(raw) {
            Some(MeetingStatus::Scheduled) => Self::Upcoming,
            Some(MeetingStatus::Ongoing) => Self::Live,
            _ => {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|category| category.label().eq_ignore_ascii_case(raw))
                    .unwrap_or_default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState<C> {
    pub query: String,
    pub category: C,
}

impl<C: Category> FilterState<C> {
    #[must_use]
    pub fn new(query: impl Into<String>, category: C) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Whether `record` passes both the category and the query.
    #[must_use]
    pub fn admits(&self, record: &DisplayRecord) -> bool {
        self.category.matches(record) && matches_query(record, &self.query, C::SEARCH_FIELDS)
    }
}

/// Stable filter: rows passing `state`, in source order.
#[must_use]
pub fn apply_filter<'a, C: Category>(
    records: &'a [DisplayRecord],
    state: &FilterState<C>,
) -> Vec<&'a DisplayRecord> {
    records.iter().filter(|record| state.admits(record)).collect()
}

/// Per-tab totals over the unfiltered rows, in tab order.
#[must_use]
pub fn category_counts<C: Category>(records: &[DisplayRecord]) -> Vec<(C, usize)> {
    C::ALL
        .iter()
        .map(|&category| {
            let count = records.iter().filter(|r| category.matches(r)).count();
            (category, count)
        })
        .collect()
}

/// Case-insensitive substring match of the trimmed query against `fields`.
/// An empty query matches everything.
#[must_use]
pub fn matches_query(record: &DisplayRecord, query: &str, fields: &[SearchField]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .filter_map(|field| field.value(record))
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mapper::{RecordKind, StatusTone};

    fn row(id: &str, title: &str, status: &str) -> DisplayRecord {
        DisplayRecord {
            id: id.into(),
            kind: RecordKind::Meeting,
            title: title.into(),
            subtitle: "—".into(),
            kind_label: "10:00".into(),
            figure: "30 min".into(),
            date: "—".into(),
            end_date: None,
            status: status.into(),
            raw_status: Some(status.into()),
            tone: StatusTone::Neutral,
            description: String::new(),
            context: None,
        }
    }

    #[test]
    fn category_parse_fails_closed() {
        assert_eq!(ContractCategory::parse(" expired "), ContractCategory::Status(ContractStatus::Expired));
        assert_eq!(ContractCategory::parse("All Status"), ContractCategory::All);
        assert_eq!(ContractCategory::parse("archived"), ContractCategory::All);
        assert_eq!(MeetingCategory::parse("ONGOING"), MeetingCategory::Status(MeetingStatus::Ongoing));
        assert_eq!(MeetingCategory::parse(""), MeetingCategory::All);
        assert_eq!(AttendeeCategory::parse("Live"), AttendeeCategory::Live);
        assert_eq!(AttendeeCategory::parse("scheduled"), AttendeeCategory::Upcoming);
        assert_eq!(AttendeeCategory::parse("completed"), AttendeeCategory::All);
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = ContractCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All Status", "Active", "Expired", "Pending"]);
        let labels: Vec<_> = AttendeeCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["all", "upcoming", "live"]);
    }

    #[test]
    fn attendee_tabs_hide_completed() {
        let rows = vec![
            row("1", "a", "scheduled"),
            row("2", "b", "ongoing"),
            row("3", "c", "completed"),
            row("4", "d", "cancelled"),
        ];
        let counts = category_counts::<AttendeeCategory>(&rows);
        assert_eq!(
            counts,
            vec![
                (AttendeeCategory::All, 4),
                (AttendeeCategory::Upcoming, 1),
                (AttendeeCategory::Live, 1),
            ]
        );
        let admin = category_counts::<MeetingCategory>(&rows);
        assert_eq!(admin[0], (MeetingCategory::All, 4));
        assert_eq!(admin[3], (MeetingCategory::Status(MeetingStatus::Completed), 1));
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let rows = vec![row("1", "Quarterly Review", "scheduled"), row("2", "Kickoff", "scheduled")];
        let state = FilterState::new("  REVIEW ", MeetingCategory::All);
        let ids: Vec<_> = apply_filter(&rows, &state).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn missing_fields_never_match_the_placeholder() {
        let mut sparse = row("1", PLACEHOLDER, "Active");
        sparse.kind = RecordKind::Contract;
        sparse.kind_label = PLACEHOLDER.into();
        sparse.description = PLACEHOLDER.into();
        let mut titled = row("2", "Phase 1 — rollout", "Active");
        titled.kind = RecordKind::Contract;

        let rows = vec![sparse, titled];
        let state = FilterState::new(PLACEHOLDER, ContractCategory::All);
        let ids: Vec<_> = apply_filter(&rows, &state).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn meeting_search_ignores_host() {
        let mut host_match = row("1", "Kickoff", "scheduled");
        host_match.subtitle = "review-bot".into();
        let state = FilterState::new("review", MeetingCategory::All);
        assert!(apply_filter(&[host_match], &state).is_empty());
    }
}
