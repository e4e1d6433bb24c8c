use crate::schema::{CanonicalRecord, RawRecord};
use chrono::NaiveDate;
use serde_json::Value;

/// Substituted when the source record carries no recipient name.
pub const UNKNOWN_RECIPIENT: &str = "Unknown Recipient";

/// Substituted when the source record carries no award identifier.
pub const PLACEHOLDER_AWARD_ID: &str = "N/A";

/// Date formats accepted from the wire, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub fn normalize_records(raw_records: &[RawRecord]) -> Vec<CanonicalRecord> {
    raw_records.iter().map(normalize_record).collect()
}

/// Coerces a raw award record into a fully populated [`CanonicalRecord`].
///
/// Total function: a malformed field degrades to its default rather than
/// erroring. Non-numeric amounts coerce to 0.0, which can understate
/// totals; this is a known approximation, not silently corrected further.
pub fn normalize_record(raw: &RawRecord) -> CanonicalRecord {
    CanonicalRecord {
        award_id: coerce_string(raw.award_id.as_ref(), PLACEHOLDER_AWARD_ID),
        recipient_name: coerce_string(raw.recipient_name.as_ref(), UNKNOWN_RECIPIENT),
        award_amount: coerce_amount(raw.award_amount.as_ref()),
        action_date: coerce_date(raw.action_date.as_ref()),
        description: raw.description.as_ref().and_then(value_as_string),
        extra: raw.extra.clone(),
    }
}

fn coerce_string(value: Option<&Value>, fallback: &str) -> String {
    value
        .and_then(value_as_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric coercion for the amount field. JSON numbers pass through;
/// numeric strings are parsed; anything else (null, objects, junk text)
/// becomes 0.0. The sign is never touched.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

/// Attempts to read a calendar date from the raw value. Absent values,
/// non-strings, and unparseable strings all yield `None`.
pub fn coerce_date(value: Option<&Value>) -> Option<NaiveDate> {
    let text = match value {
        Some(Value::String(s)) => s.trim(),
        _ => return None,
    };

    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
