//! Amount and calendar-date formatting for display rows.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate};
use desk_config::display::DisplayConfig;
use desk_core::PLACEHOLDER;

const ISO_DATE: &str = "%Y-%m-%d";

/// Formats raw values using the `[display]` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    currency_symbol: String,
    date_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl Formatter {
    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            date_format: config.date_format.clone(),
        }
    }

    /// `150000` → `$150,000`, `1234.5` → `$1,234.5`, missing → `—`.
    #[must_use]
    pub fn amount(&self, value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() => {
                let grouped = group_number(v.abs());
                let sign = if v < 0.0 && grouped != "0" { "-" } else { "" };
                format!("{sign}{}{grouped}", self.currency_symbol)
            }
            _ => PLACEHOLDER.to_string(),
        }
    }

    /// Format a `YYYY-MM-DD` or RFC 3339 string with the configured pattern.
    ///
    /// Unparseable input is returned verbatim; missing or blank input renders `—`.
    #[must_use]
    pub fn date(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return PLACEHOLDER.to_string();
        };
        let Some(date) = parse_calendar_date(raw) else {
            return raw.to_string();
        };
        let mut out = String::new();
        // a bad user-supplied pattern makes chrono's Display fail
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format(ISO_DATE).to_string();
        }
        out
    }

    /// `"{n} min"`.
    #[must_use]
    pub fn minutes(minutes: u32) -> String {
        format!("{minutes} min")
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_DATE)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Thousands-grouped non-negative number with at most two fraction digits,
/// trailing zeros trimmed.
fn group_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn amounts_are_grouped_and_trimmed() {
        let f = Formatter::default();
        assert_eq!(f.amount(Some(150_000.0)), "$150,000");
        assert_eq!(f.amount(Some(1234.5)), "$1,234.5");
        assert_eq!(f.amount(Some(999.0)), "$999");
        assert_eq!(f.amount(Some(1_000_000.256)), "$1,000,000.26");
        assert_eq!(f.amount(Some(0.0)), "$0");
        assert_eq!(f.amount(Some(-2500.1)), "-$2,500.1");
    }

    #[test]
    fn missing_amount_is_placeholder() {
        let f = Formatter::default();
        assert_eq!(f.amount(None), "—");
        assert_eq!(f.amount(Some(f64::NAN)), "—");
    }

    #[test]
    fn currency_symbol_comes_from_config() {
        let config = DisplayConfig {
            currency_symbol: "€".into(),
            ..DisplayConfig::default()
        };
        assert_eq!(Formatter::from_config(&config).amount(Some(75_000.0)), "€75,000");
    }

    #[test]
    fn dates_accept_iso_and_rfc3339() {
        let f = Formatter::default();
        assert_eq!(f.date(Some("2025-01-15")), "Jan 15, 2025");
        assert_eq!(f.date(Some("2024-03-05T09:30:00.000Z")), "Mar 5, 2024");
    }

    #[test]
    fn bad_dates_pass_through() {
        let f = Formatter::default();
        assert_eq!(f.date(Some("next tuesday")), "next tuesday");
        assert_eq!(f.date(Some("2024-13-40")), "2024-13-40");
        assert_eq!(f.date(Some("  ")), "—");
        assert_eq!(f.date(None), "—");
    }

    #[test]
    fn custom_date_pattern() {
        let config = DisplayConfig {
            date_format: "%d/%m/%Y".into(),
            ..DisplayConfig::default()
        };
        assert_eq!(Formatter::from_config(&config).date(Some("2025-01-15")), "15/01/2025");
    }

    #[test]
    fn invalid_pattern_falls_back_to_iso() {
        let config = DisplayConfig {
            date_format: "%Q".into(),
            ..DisplayConfig::default()
        };
        assert_eq!(Formatter::from_config(&config).date(Some("2025-01-15")), "2025-01-15");
    }
}
