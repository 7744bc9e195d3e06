//! Date and timezone predicates

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde_json::Value;

/// Largest absolute timestamp, in milliseconds, a date can hold.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

fn parses_as_date(s: &str) -> bool {
    let s = s.trim();
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    // RFC 3339 with a `Z`/offset but no seconds
    if DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%#z").is_ok() {
        return true;
    }
    DATE_TIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(s, format).is_ok())
}

/// A valid date can be built from the value.
///
/// Numbers are millisecond timestamps and must be finite and within
/// ±8.64e15. Strings must be RFC 3339, RFC 2822, or one of the common
/// `YYYY-MM-DD` / `YYYY/MM/DD` forms with an optional time. Everything else
/// is rejected.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::temporal::date;
///
/// assert!(date(Some(&json!("2024-02-29"))));
/// assert!(date(Some(&json!("2024-02-29T10:15:00Z"))));
/// assert!(date(Some(&json!(0))));
/// assert!(!date(Some(&json!("2023-02-29"))));
/// assert!(!date(Some(&json!("yesterday"))));
/// ```
pub fn date(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .is_some_and(|ms| ms.is_finite() && ms.abs() <= MAX_TIMESTAMP_MS),
        Some(Value::String(s)) => parses_as_date(s),
        _ => false,
    }
}

/// The value is a non-empty IANA timezone identifier, in any letter case.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::temporal::timezone;
///
/// assert!(timezone(Some(&json!("Europe/Berlin"))));
/// assert!(timezone(Some(&json!("europe/berlin"))));
/// assert!(!timezone(Some(&json!("Mars/Olympus_Mons"))));
/// assert!(!timezone(Some(&json!(""))));
/// ```
pub fn timezone(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Tz::from_str_insensitive(s).is_ok(),
        _ => false,
    }
}
