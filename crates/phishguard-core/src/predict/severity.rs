//! Coarse confidence bucket derived from the phishing probability.

use serde::Serialize;

/// Severity of a phishing verdict. `None` is reported for URLs predicted
/// legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Buckets the phishing probability for a positive prediction:
    /// > 0.75 is high, > 0.5 medium, anything else low.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.75 {
            Self::High
        } else if probability > 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
