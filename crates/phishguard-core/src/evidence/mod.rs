//! Remote evidence gathering: WHOIS registration lookup and page fetch.
//!
//! Both probes are best-effort. Each one runs blocking network I/O under
//! `spawn_blocking`, bounded by its own timeout, and collapses any failure
//! (connect, timeout, parse, missing data) into absent evidence so the
//! feature pipeline always completes. The two probes have no ordering
//! dependency and run concurrently; no retries are performed.

pub mod page;
pub mod whois;

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::config::PhishguardConfig;
use crate::url_parts::UrlComponents;

/// Domain registration data from WHOIS. `created` is `None` when the lookup
/// failed or the registry published no creation date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationEvidence {
    pub created: Option<DateTime<Utc>>,
}

impl RegistrationEvidence {
    pub fn absent() -> Self {
        Self::default()
    }

    /// Whole days between `now` and the creation instant; 0 when unknown.
    /// Not clamped: a future-dated registration yields negative days.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        self.created.map(|c| (now - c).num_days()).unwrap_or(0)
    }
}

/// One anchor element from the fetched page. An `<a>` without an `href`
/// keeps an empty string so it still counts toward the hyperlink total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
}

/// Parsed page content: literal (trimmed) title text and all anchors in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEvidence {
    pub title: String,
    pub anchors: Vec<Anchor>,
}

/// Evidence gathered for one request. `page` is `None` when the fetch or the
/// markup parse failed, which is distinct from a fetched page whose title
/// happens to be empty.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub registration: RegistrationEvidence,
    pub page: Option<PageEvidence>,
}

/// Runs the WHOIS lookup and the page fetch concurrently, each bounded by
/// the configured timeout. Failures are logged and substituted with absent
/// evidence; this function never fails.
pub async fn gather(url: &UrlComponents, cfg: &PhishguardConfig) -> Evidence {
    let probe_timeout = Duration::from_secs(cfg.evidence_timeout_secs);

    let registration = {
        let host = url.host.clone();
        let server = cfg.whois_server.clone();
        async move {
            if host.is_empty() {
                tracing::debug!("skipping WHOIS lookup: no host");
                return RegistrationEvidence::absent();
            }
            let lookup = tokio::task::spawn_blocking(move || {
                whois::lookup(&host, &server, probe_timeout)
            });
            match tokio::time::timeout(probe_timeout, lookup).await {
                Ok(Ok(Ok(evidence))) => evidence,
                Ok(Ok(Err(e))) => {
                    tracing::warn!("whois lookup failed: {e:#}");
                    RegistrationEvidence::absent()
                }
                Ok(Err(e)) => {
                    tracing::warn!("whois task failed: {e}");
                    RegistrationEvidence::absent()
                }
                Err(_) => {
                    tracing::warn!("whois lookup timed out after {}s", probe_timeout.as_secs());
                    RegistrationEvidence::absent()
                }
            }
        }
    };

    let page = {
        let raw = url.raw.clone();
        let user_agent = cfg.user_agent.clone();
        let max_body = cfg.max_body_bytes;
        async move {
            let fetch = tokio::task::spawn_blocking(move || {
                page::fetch(&raw, &user_agent, probe_timeout, max_body)
            });
            match tokio::time::timeout(probe_timeout, fetch).await {
                Ok(Ok(Ok(evidence))) => Some(evidence),
                Ok(Ok(Err(e))) => {
                    tracing::warn!("page fetch failed: {e:#}");
                    None
                }
                Ok(Err(e)) => {
                    tracing::warn!("page fetch task failed: {e}");
                    None
                }
                Err(_) => {
                    tracing::warn!("page fetch timed out after {}s", probe_timeout.as_secs());
                    None
                }
            }
        }
    };

    let (registration, page) = tokio::join!(registration, page);
    Evidence { registration, page }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn age_days_absent_is_zero() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(RegistrationEvidence::absent().age_days(now), 0);
    }

    #[test]
    fn age_days_counts_whole_days() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let reg = RegistrationEvidence { created: Some(created) };
        assert_eq!(reg.age_days(now), 30);
    }

    #[test]
    fn age_days_future_creation_is_negative() {
        let created = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let reg = RegistrationEvidence { created: Some(created) };
        assert!(reg.age_days(now) < 0);
    }

    #[test]
    fn evidence_default_is_fully_absent() {
        let ev = Evidence::default();
        assert!(ev.registration.created.is_none());
        assert!(ev.page.is_none());
    }
}
