//! Parse WHOIS response lines: creation dates and referral servers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Field names that carry a creation date across registries. Matched
/// case-insensitively against the part before the first `:`.
const CREATION_KEYS: [&str; 5] = [
    "creation date",
    "created",
    "created on",
    "registered on",
    "registration time",
];

/// Field names pointing at the authoritative WHOIS server.
const REFERRAL_KEYS: [&str; 3] = ["refer", "whois", "registrar whois server"];

/// Scans every line for a creation-date field and returns the earliest
/// parseable date. Registries often list both registry and registrar records;
/// the oldest one is the true registration instant.
pub(crate) fn earliest_creation_date(response: &str) -> Option<DateTime<Utc>> {
    response
        .lines()
        .filter_map(field_value(&CREATION_KEYS))
        .filter_map(|value| parse_date_value(&value))
        .min()
}

/// Returns the referral server from `refer:`-style lines, if any.
pub(crate) fn referral_server(response: &str) -> Option<String> {
    response
        .lines()
        .filter_map(field_value(&REFERRAL_KEYS))
        .find(|v| !v.is_empty())
}

/// Matcher for `name: value` lines whose name is one of `keys`.
fn field_value<'k>(keys: &'k [&'k str]) -> impl Fn(&str) -> Option<String> + 'k {
    move |line: &str| {
        let (name, value) = line.split_once(':')?;
        let name = name.trim();
        if keys.iter().any(|k| name.eq_ignore_ascii_case(k)) {
            Some(value.trim().to_string())
        } else {
            None
        }
    }
}

/// Date formats observed in registry output, tried in order. Values with
/// trailing commentary (e.g. `2000-03-01 12:00:00 (GMT+0:00)`) fall back to
/// parsing the first whitespace-separated token.
fn parse_date_value(value: &str) -> Option<DateTime<Utc>> {
    let candidates = [value, value.split_whitespace().next().unwrap_or("")];
    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(candidate, fmt) {
                return Some(dt.and_utc());
            }
        }
        for fmt in ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"] {
            if let Ok(d) = NaiveDate::parse_from_str(candidate, fmt) {
                return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
            }
        }
    }
    None
}
