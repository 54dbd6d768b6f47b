//! Logistic-regression model artifact: a JSON file carrying the feature
//! schema, a standardizing scaler, and the regression weights.
//!
//! Loading validates the artifact's declared feature names against
//! [`FEATURE_NAMES`] — name set *and* order — so a vector/model mismatch is a
//! startup failure, not a silent misprediction at request time.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::{Classifier, ClassifierError, Prediction};
use crate::features::{FeatureVector, FEATURE_NAMES};

/// Artifact schema version understood by this build.
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    schema_version: u32,
    feature_names: Vec<String>,
    /// Per-feature scaler means.
    mean: Vec<f64>,
    /// Per-feature scaler deviations; a zero entry disables scaling for that
    /// feature (constant-valued during training).
    scale: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
}

/// Immutable model handle built once at startup and shared across requests.
#[derive(Debug, Clone)]
pub struct LinearModel {
    mean: Vec<f64>,
    scale: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Load and validate an artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read model artifact {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("invalid model artifact {}", path.display()))
    }

    /// Parse and validate an artifact from its JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(data).context("parse model artifact")?;

        if artifact.schema_version != SCHEMA_VERSION {
            bail!(
                "unsupported artifact schema_version {} (expected {})",
                artifact.schema_version,
                SCHEMA_VERSION
            );
        }
        if artifact.feature_names.len() != FEATURE_NAMES.len() {
            bail!(
                "artifact declares {} features, this build has {}",
                artifact.feature_names.len(),
                FEATURE_NAMES.len()
            );
        }
        for (i, (got, expected)) in
            artifact.feature_names.iter().zip(FEATURE_NAMES.iter()).enumerate()
        {
            if got != expected {
                bail!("feature {i} is {got:?}, expected {expected:?} (order is part of the contract)");
            }
        }
        for (name, len) in [
            ("mean", artifact.mean.len()),
            ("scale", artifact.scale.len()),
            ("weights", artifact.weights.len()),
        ] {
            if len != FEATURE_NAMES.len() {
                bail!("artifact {name} has {len} entries, expected {}", FEATURE_NAMES.len());
            }
        }

        Ok(Self {
            mean: artifact.mean,
            scale: artifact.scale,
            weights: artifact.weights,
            intercept: artifact.intercept,
        })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError> {
        let row = features.values();
        if row.len() != self.weights.len() {
            return Err(ClassifierError::Schema(format!(
                "vector has {} values, model expects {}",
                row.len(),
                self.weights.len()
            )));
        }

        let mut z = self.intercept;
        for (i, &x) in row.iter().enumerate() {
            let scale = if self.scale[i] != 0.0 { self.scale[i] } else { 1.0 };
            z += self.weights[i] * (x - self.mean[i]) / scale;
        }

        let probability = sigmoid(z);
        if !probability.is_finite() {
            return Err(ClassifierError::Inference(format!(
                "non-finite probability from z = {z}"
            )));
        }
        Ok(Prediction {
            label: u8::from(probability > 0.5),
            probability,
        })
    }
}
