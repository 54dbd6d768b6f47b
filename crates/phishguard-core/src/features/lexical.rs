//! Lexical/structural helpers over the raw URL and hostname.

/// TLD strings checked for inside subdomain labels.
const KNOWN_TLDS: [&str; 7] = ["com", "net", "org", "biz", "ru", "info", "ng"];

/// Keywords whose presence anywhere in the lower-cased URL flags a hint.
const PHISH_HINTS: [&str; 5] = ["login", "update", "secure", "verify", "account"];

pub(crate) fn count_char(s: &str, c: char) -> usize {
    s.chars().filter(|x| *x == c).count()
}

pub(crate) fn count_substr(s: &str, needle: &str) -> usize {
    s.matches(needle).count()
}

/// Digit characters over total characters; 0.0 for the empty string.
pub(crate) fn digit_ratio(s: &str) -> f64 {
    let total = s.chars().count();
    if total == 0 {
        return 0.0;
    }
    let digits = s.chars().filter(char::is_ascii_digit).count();
    digits as f64 / total as f64
}

/// True for a dotted-quad IPv4 literal: exactly four groups of 1-3 digits.
/// No range check on the octets; `999.999.999.999` still counts.
pub(crate) fn is_ipv4_literal(host: &str) -> bool {
    let groups: Vec<&str> = host.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| (1..=3).contains(&g.len()) && g.chars().all(|c| c.is_ascii_digit()))
}

/// Tokens when splitting on non-word characters (word = alphanumeric or `_`).
/// Empty tokens from adjacent separators are dropped.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

/// Length of the shortest token, 0 if there are none.
pub(crate) fn shortest_word(s: &str) -> usize {
    words(s).map(|w| w.chars().count()).min().unwrap_or(0)
}

/// Length of the longest token, 0 if there are none.
pub(crate) fn longest_word(s: &str) -> usize {
    words(s).map(|w| w.chars().count()).max().unwrap_or(0)
}

/// True when any host label excluding the last two equals a known TLD.
/// Equality against the fixed list is intentional and can false-positive on
/// business names like `info.tickets.example.com`.
pub(crate) fn tld_in_subdomain(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 {
        return false;
    }
    labels[..labels.len() - 2]
        .iter()
        .any(|l| KNOWN_TLDS.iter().any(|t| l.eq_ignore_ascii_case(t)))
}

pub(crate) fn has_phish_hint(url: &str) -> bool {
    let lower = url.to_lowercase();
    PHISH_HINTS.iter().any(|h| lower.contains(h))
}
