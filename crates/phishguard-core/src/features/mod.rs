//! Feature vector construction.
//!
//! `build` is a pure function of the parsed URL, the gathered evidence, and
//! a clock instant. It always emits every declared feature in declared order
//! with a finite value; missing evidence maps to documented fallbacks, never
//! to a missing entry. The name list is a versioned contract shared with the
//! model artifact and validated when the model is loaded.

mod content;
mod lexical;

use chrono::{DateTime, Utc};

use crate::evidence::{PageEvidence, RegistrationEvidence};
use crate::url_parts::UrlComponents;

/// Declared feature names, in the exact order the classifier was trained on.
/// Appending is a schema change; reordering is a breaking one.
pub const FEATURE_NAMES: [&str; 23] = [
    "length_url",
    "length_hostname",
    "ip",
    "nb_dots",
    "nb_qm",
    "nb_eq",
    "nb_slash",
    "nb_www",
    "ratio_digits_url",
    "ratio_digits_host",
    "tld_in_subdomain",
    "prefix_suffix",
    "shortest_word_host",
    "longest_words_raw",
    "longest_word_path",
    "phish_hints",
    "nb_hyperlinks",
    "ratio_intHyperlinks",
    "empty_title",
    "domain_in_title",
    "domain_age",
    "google_index",
    "page_rank",
];

/// Fixed-order numeric summary of a URL. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_NAMES.len()],
}

impl FeatureVector {
    /// Values in declared order, as a single numeric row for the classifier.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value by feature name, `None` for an undeclared name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES.iter().position(|n| *n == name).map(|i| self.values[i])
    }

    /// (name, value) pairs in declared order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

/// Builds the feature vector from the URL components and gathered evidence.
///
/// `now` is passed explicitly so the computation stays deterministic under
/// test; callers use `Utc::now()`.
pub fn build(
    url: &UrlComponents,
    registration: &RegistrationEvidence,
    page: Option<&PageEvidence>,
    now: DateTime<Utc>,
) -> FeatureVector {
    let raw = url.raw.as_str();
    let host = url.host.as_str();
    let bool01 = |b: bool| if b { 1.0 } else { 0.0 };

    let values = [
        raw.chars().count() as f64,                                // length_url
        host.chars().count() as f64,                               // length_hostname
        bool01(lexical::is_ipv4_literal(host)),                    // ip
        lexical::count_char(raw, '.') as f64,                      // nb_dots
        lexical::count_char(raw, '?') as f64,                      // nb_qm
        lexical::count_char(raw, '=') as f64,                      // nb_eq
        lexical::count_char(raw, '/') as f64,                      // nb_slash
        lexical::count_substr(raw, "www") as f64,                  // nb_www
        lexical::digit_ratio(raw),                                 // ratio_digits_url
        lexical::digit_ratio(host),                                // ratio_digits_host
        bool01(lexical::tld_in_subdomain(host)),                   // tld_in_subdomain
        bool01(host.contains('-')),                                // prefix_suffix
        lexical::shortest_word(host) as f64,                       // shortest_word_host
        lexical::longest_word(raw) as f64,                         // longest_words_raw
        lexical::longest_word(&url.path) as f64,                   // longest_word_path
        bool01(lexical::has_phish_hint(raw)),                      // phish_hints
        content::hyperlink_count(page) as f64,                     // nb_hyperlinks
        content::internal_hyperlink_ratio(page),                   // ratio_intHyperlinks
        bool01(content::empty_title(page)),                        // empty_title
        bool01(content::domain_in_title(page, url.domain_label())), // domain_in_title
        content::domain_age_days(registration, now),               // domain_age
        0.0,                                                       // google_index (reserved)
        0.0,                                                       // page_rank (reserved)
    ];

    FeatureVector { values }
}
