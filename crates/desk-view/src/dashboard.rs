//! Summary shown on the administrative landing view.

use std::collections::{BTreeMap, HashMap};

use chrono::{Days, NaiveDate};
use desk_config::display::DisplayConfig;
use desk_core::entities::ContractRecord;
use desk_core::enums::ContractStatus;
use serde::Serialize;

use crate::format::{Formatter, parse_calendar_date};
use crate::mapper::{DisplayRecord, map_contract};

/// One bucket of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    /// Integer percentage of the total, rounded half up.
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub pending: usize,
    /// Sum of active contract amounts.
    pub active_value: f64,
    pub active_value_label: String,
    /// Active contracts ending within the configured window from today.
    pub expiring_soon: usize,
    /// By contract type, largest first (ties by name).
    pub by_type: Vec<Share>,
    /// Active, Expired, Pending.
    pub by_status: Vec<Share>,
    /// First `recent_count` contracts in source order.
    pub recent: Vec<DisplayRecord>,
}

/// Summarize `contracts` as of `today`.
///
/// Contracts without a known status count as Pending, matching the list
/// display.
#[must_use]
pub fn summarize(contracts: &[ContractRecord], config: &DisplayConfig, today: NaiveDate) -> DashboardSummary {
    let formatter = Formatter::from_config(config);
    let horizon = today
        .checked_add_days(Days::new(u64::from(config.expiring_soon_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut status_counts: HashMap<ContractStatus, usize> = HashMap::new();
    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut active_value = 0.0;
    let mut expiring_soon = 0;

    for contract in contracts {
        let status = contract.known_status().unwrap_or(ContractStatus::Pending);
        *status_counts.entry(status).or_default() += 1;

        let kind = contract
            .contract_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Other");
        *type_counts.entry(kind.to_string()).or_default() += 1;

        if status == ContractStatus::Active {
            active_value += contract.amount.unwrap_or(0.0);
            let ends = contract.end_date.as_deref().and_then(parse_calendar_date);
            if ends.is_some_and(|end| end >= today && end <= horizon) {
                expiring_soon += 1;
            }
        }
    }

    let total = contracts.len();
    let count_of = |status: ContractStatus| status_counts.get(&status).copied().unwrap_or(0);

    let mut by_type: Vec<Share> = type_counts
        .into_iter()
        .map(|(label, count)| share(label, count, total))
        .collect();
    // BTreeMap order already sorts ties by name; the sort is stable
    by_type.sort_by(|a, b| b.count.cmp(&a.count));

    let by_status = ContractStatus::ALL
        .into_iter()
        .map(|status| share(status.as_str().to_string(), count_of(status), total))
        .collect();

    let recent_count = usize::try_from(config.recent_count).unwrap_or(usize::MAX);
    let recent = contracts
        .iter()
        .filter_map(|contract| map_contract(contract, &formatter).ok())
        .take(recent_count)
        .collect();

    DashboardSummary {
        total,
        active: count_of(ContractStatus::Active),
        expired: count_of(ContractStatus::Expired),
        pending: count_of(ContractStatus::Pending),
        active_value,
        active_value_label: formatter.amount(Some(active_value)),
        expiring_soon,
        by_type,
        by_status,
        recent,
    }
}

fn share(label: String, count: usize, total: usize) -> Share {
    let percent = if total == 0 {
        0
    } else {
        u32::try_from((count * 100 + total / 2) / total).unwrap_or(100)
    };
    Share {
        label,
        count,
        percent,
    }
}
