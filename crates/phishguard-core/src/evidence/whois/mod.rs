//! WHOIS registration lookup over TCP port 43.
//!
//! Queries the configured server (default `whois.iana.org`) and follows a
//! single referral to the registry/registrar server when the first response
//! carries no creation date. Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

mod parse;

use anyhow::{bail, Context, Result};
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::RegistrationEvidence;

/// Cap on a single WHOIS response. Registry output is a few KiB; anything
/// past this is truncated before parsing.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Looks up `host` and returns its registration evidence.
///
/// Fails when the server is unreachable, the exchange times out, or no
/// parseable creation date is found; the caller substitutes absent evidence.
/// If the response lists several creation dates, the earliest one wins.
pub fn lookup(host: &str, server: &str, timeout: Duration) -> Result<RegistrationEvidence> {
    let first = query(server, host, timeout)?;
    if let Some(created) = parse::earliest_creation_date(&first) {
        return Ok(RegistrationEvidence { created: Some(created) });
    }

    // One referral hop: IANA answers with `refer:`, some registries with `whois:`.
    if let Some(referral) = parse::referral_server(&first) {
        let referral = with_default_port(&referral);
        if referral != server {
            let second = query(&referral, host, timeout)?;
            if let Some(created) = parse::earliest_creation_date(&second) {
                return Ok(RegistrationEvidence { created: Some(created) });
            }
        }
    }

    bail!("no creation date in WHOIS response for {host}")
}

fn with_default_port(server: &str) -> String {
    if server.contains(':') {
        server.to_string()
    } else {
        format!("{server}:43")
    }
}

/// One WHOIS exchange: connect, send the domain, read until the server
/// closes. A read timeout with partial data keeps what was received.
fn query(server: &str, host: &str, timeout: Duration) -> Result<String> {
    let addr = server
        .to_socket_addrs()
        .with_context(|| format!("resolve WHOIS server {server}"))?
        .next()
        .with_context(|| format!("WHOIS server {server} has no address"))?;

    let mut stream = TcpStream::connect_timeout(&addr, timeout)
        .with_context(|| format!("connect to WHOIS server {server}"))?;
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;

    stream
        .write_all(format!("{host}\r\n").as_bytes())
        .context("send WHOIS query")?;

    let mut response = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                response.extend_from_slice(&buf[..n]);
                if response.len() >= MAX_RESPONSE_BYTES {
                    response.truncate(MAX_RESPONSE_BYTES);
                    break;
                }
            }
            // Keep a partial response; some servers stall instead of closing.
            Err(_) if !response.is_empty() => break,
            Err(e) => return Err(e).context("read WHOIS response"),
        }
    }

    Ok(String::from_utf8_lossy(&response).into_owned())
}
