//! Page fetch: one HTTP GET of the request URL, parsed for title and anchors.
//!
//! Uses the curl crate (libcurl) with connect and total timeouts and a cap
//! on the buffered body. Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

mod parse;

use anyhow::{Context, Result};
use std::time::Duration;

use super::PageEvidence;

/// Fetches `url` and parses the body as markup.
///
/// Follows redirects. Fails on connect/transfer errors, non-2xx status, or a
/// body larger than `max_body_bytes`; the caller substitutes absent evidence.
pub fn fetch(
    url: &str,
    user_agent: &str,
    timeout: Duration,
    max_body_bytes: usize,
) -> Result<PageEvidence> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(user_agent)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() + data.len() > max_body_bytes {
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    let html = String::from_utf8_lossy(&body);
    parse::parse_page(&html)
}
