//! Fetching the bundled sample text over HTTP.

use anyhow::{Context, Result};
use tracing::info;

/// Download the sample text from `url` and return it as a single string.
pub fn fetch_sample_text(url: &str) -> Result<String> {
    info!(%url, "Fetching sample text");
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("Failed to fetch sample text from {url}"))?
        .error_for_status()
        .with_context(|| format!("Sample text request to {url} was rejected"))?;
    let text = response
        .text()
        .context("Failed to read sample text body")?;
    info!(total_chars = text.len(), "Fetched sample text");
    Ok(text)
}
