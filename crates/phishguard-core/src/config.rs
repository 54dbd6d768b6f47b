use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
///
/// Every field has a default so a partial file (or none at all) still yields
/// a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhishguardConfig {
    /// Per-probe timeout in seconds for the WHOIS lookup and the page fetch.
    /// Each probe is bounded independently; a slow probe falls back to
    /// "no evidence" rather than delaying the prediction further.
    pub evidence_timeout_secs: u64,
    /// WHOIS server queried for registration data, as `host:port`.
    /// Referrals in the response are followed one hop.
    pub whois_server: String,
    /// User-Agent sent with the page fetch.
    pub user_agent: String,
    /// Cap on the fetched page body in bytes; larger responses are treated
    /// as a failed fetch.
    pub max_body_bytes: usize,
    /// Path to the model artifact (JSON). Required by `serve`/`check` unless
    /// passed on the command line.
    pub model_path: Option<PathBuf>,
    /// Listen address for `phishguard serve`.
    pub listen_addr: String,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            evidence_timeout_secs: 5,
            whois_server: "whois.iana.org:43".to_string(),
            user_agent: "phishguard/0.1".to_string(),
            max_body_bytes: 2 * 1024 * 1024,
            model_path: None,
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishguardConfig = toml::from_str(&data)?;
    Ok(cfg)
}
