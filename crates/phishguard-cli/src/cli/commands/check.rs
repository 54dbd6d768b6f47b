//! `phishguard check <url>` – classify one URL from the command line.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use std::path::PathBuf;

use super::build_predictor;

pub async fn run_check(cfg: PhishguardConfig, url: &str, model: Option<PathBuf>) -> Result<()> {
    let predictor = build_predictor(&cfg, model)?;
    let verdict = predictor.predict(url).await?;
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
