//! Page-content and registration-age helpers.
//!
//! All functions are total over absent evidence: a missing page keeps every
//! content feature at its fallback (0), including `empty_title`, which is
//! only meaningful for a page that was actually fetched.

use chrono::{DateTime, Utc};

use crate::evidence::{PageEvidence, RegistrationEvidence};

pub(crate) fn hyperlink_count(page: Option<&PageEvidence>) -> usize {
    page.map(|p| p.anchors.len()).unwrap_or(0)
}

/// Fraction of anchors whose href starts with `/`; 0.0 with no anchors.
pub(crate) fn internal_hyperlink_ratio(page: Option<&PageEvidence>) -> f64 {
    match page {
        Some(p) if !p.anchors.is_empty() => {
            let internal = p.anchors.iter().filter(|a| a.href.starts_with('/')).count();
            internal as f64 / p.anchors.len() as f64
        }
        _ => 0.0,
    }
}

pub(crate) fn empty_title(page: Option<&PageEvidence>) -> bool {
    page.map(|p| p.title.is_empty()).unwrap_or(false)
}

/// True when the host's domain label appears (case-folded) in the title.
pub(crate) fn domain_in_title(page: Option<&PageEvidence>, domain_label: &str) -> bool {
    page.map(|p| p.title.to_lowercase().contains(&domain_label.to_lowercase()))
        .unwrap_or(false)
}

pub(crate) fn domain_age_days(registration: &RegistrationEvidence, now: DateTime<Utc>) -> f64 {
    registration.age_days(now) as f64
}
