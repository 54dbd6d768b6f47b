//! CLI for the phishguard URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishguard_core::config;
use std::path::PathBuf;

use commands::{run_check, run_serve};

/// Top-level CLI for the phishguard URL classifier.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "phishguard: URL phishing classification service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the HTTP API (POST /predict).
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080. Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
        /// Path to the model artifact (JSON). Overrides the config file.
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Classify a single URL and print the verdict as JSON.
    Check {
        /// URL to classify.
        url: String,
        /// Path to the model artifact (JSON). Overrides the config file.
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { bind, model } => run_serve(cfg, bind, model).await?,
            CliCommand::Check { url, model } => run_check(cfg, &url, model).await?,
        }
        Ok(())
    }
}
