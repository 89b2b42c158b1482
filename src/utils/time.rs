use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 with millisecond precision, e.g. `2023-01-15T10:00:00.000Z`.
pub fn iso_millis(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    iso_millis(Utc::now())
}
