mod check;
mod serve;

pub use check::run_check;
pub use serve::run_serve;

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::model::LinearModel;
use phishguard_core::predict::Predictor;
use std::path::PathBuf;
use std::sync::Arc;

/// Builds the predictor from the model artifact, taking the path from the
/// command line or the config file. Artifact validation failures abort here,
/// before any request is served.
fn build_predictor(cfg: &PhishguardConfig, model_override: Option<PathBuf>) -> Result<Arc<Predictor>> {
    let path = model_override
        .or_else(|| cfg.model_path.clone())
        .context("no model artifact configured; pass --model or set model_path in the config")?;
    let model = LinearModel::load(&path)?;
    tracing::info!("model artifact loaded from {}", path.display());
    Ok(Arc::new(Predictor::new(Arc::new(model), cfg.clone())))
}
