//! Lenient deserializers for fields the backend sends in more than one shape.
//!
//! Identifiers arrive as strings or numbers, amounts as numbers or numeric
//! strings (`"150000"`, `"$150,000"`), durations as integers or strings.
//! Identifiers may also come as extended-JSON `{"$oid": "..."}` objects.
//! Anything unusable becomes `None` instead of failing the whole record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Other(IgnoredAny),
}

pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Scalar::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Scalar::Int(n) => Some(n.to_string()),
        Scalar::Float(f) => Some(f.to_string()),
        Scalar::ObjectId { oid } => {
            let trimmed = oid.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Scalar::Other(_) => None,
    }))
}

pub fn opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Scalar::Text(text) => parse_amount(&text),
        #[allow(clippy::cast_precision_loss)]
        Scalar::Int(n) => Some(n as f64),
        Scalar::Float(f) => f.is_finite().then_some(f),
        Scalar::ObjectId { .. } | Scalar::Other(_) => None,
    }))
}

pub fn opt_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Scalar::Text(text) => text.trim().parse::<u32>().ok(),
        Scalar::Int(n) => u32::try_from(n).ok(),
        Scalar::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let minutes = f as u64;
            u32::try_from(minutes).ok()
        }
        Scalar::Float(_) | Scalar::ObjectId { .. } | Scalar::Other(_) => None,
    }))
}

/// Parse a user- or server-supplied amount, tolerating `$` and `,`.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
