//! Presentation settings for list rows and the dashboard.

use serde::{Deserialize, Serialize};

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

const fn default_limit() -> u32 {
    20
}

const fn default_expiring_soon_days() -> u32 {
    30
}

const fn default_recent_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Prefix for formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// `chrono` format string for calendar dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default row limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Window (days) for the dashboard's "expiring soon" count.
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: u32,

    /// Number of contracts shown under "Recent Contracts".
    #[serde(default = "default_recent_count")]
    pub recent_count: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            default_limit: default_limit(),
            expiring_soon_days: default_expiring_soon_days(),
            recent_count: default_recent_count(),
        }
    }
}
