//! Prediction pipeline: parse -> gather -> build -> classify -> verdict.
//!
//! Evidence failures never surface here; the only failure path is the
//! classifier boundary.

mod severity;

pub use severity::Severity;

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::config::PhishguardConfig;
use crate::evidence;
use crate::features;
use crate::model::{Classifier, ClassifierError};
use crate::url_parts;

/// Final answer for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// 1 = phishing, 0 = legitimate.
    pub prediction: u8,
    /// Confidence in the reported class, rounded to 4 decimal places. For a
    /// legitimate verdict this is the complement of the phishing probability.
    pub confidence: f64,
    pub severity: Severity,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("classifier: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Request-handling entry point. Holds the immutable model handle and the
/// configuration; carries no per-request state, so one instance serves any
/// number of concurrent requests.
pub struct Predictor {
    model: Arc<dyn Classifier>,
    config: PhishguardConfig,
}

impl Predictor {
    pub fn new(model: Arc<dyn Classifier>, config: PhishguardConfig) -> Self {
        Self { model, config }
    }

    /// Classifies one URL. Evidence gathering runs both remote probes
    /// concurrently and falls back to defaults on any failure, so this only
    /// errors when the classifier itself does.
    pub async fn predict(&self, url: &str) -> Result<Verdict, PredictError> {
        let parts = url_parts::parse(url);
        let evidence = evidence::gather(&parts, &self.config).await;
        let vector =
            features::build(&parts, &evidence.registration, evidence.page.as_ref(), Utc::now());

        let prediction = self.model.predict(&vector)?;
        tracing::debug!(
            url,
            label = prediction.label,
            probability = prediction.probability,
            "classified"
        );

        Ok(verdict_for(prediction.label, prediction.probability))
    }
}

fn verdict_for(label: u8, probability: f64) -> Verdict {
    if label == 1 {
        Verdict {
            prediction: 1,
            confidence: round4(probability),
            severity: Severity::from_probability(probability),
        }
    } else {
        Verdict {
            prediction: 0,
            confidence: round4(1.0 - probability),
            severity: Severity::None,
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
