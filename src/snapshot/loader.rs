use anyhow::{Context, Result};
use std::fs;

use super::types::Snapshot;

/// Load a data snapshot from a filesystem path or an http(s) URL.
///
/// The published file changes between fetches, so the HTTP path asks for an
/// uncached copy. Any failure here — unreachable source, non-success status,
/// unreadable file, malformed JSON — is an acquisition failure surfaced to
/// the caller as a single error; the scoring engine is never invoked on a
/// partially acquired snapshot.
pub async fn load_snapshot(source: &str) -> Result<Snapshot> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source).await?
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read data file at {}", source))?
    };

    parse_snapshot(&body).with_context(|| format!("Failed to parse snapshot from {}", source))
}

async fn fetch_url(url: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("Cache-Control", "no-store")
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Could not load {}: HTTP {}", url, response.status());
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}

/// Parse a snapshot from raw JSON text.
pub fn parse_snapshot(body: &str) -> Result<Snapshot> {
    serde_json::from_str(body).context("Invalid snapshot JSON")
}
