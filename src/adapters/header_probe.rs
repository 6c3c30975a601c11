//! HTTP HEAD probe for download sizes.
//!
//! Asks the mirror for a file's `Content-Length` without downloading it.
//! Redirects are followed; any final status other than 200 yields 0.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_LENGTH, StatusCode};

use super::SizeProbe;

/// Content-Length probe over HTTP
pub struct HeaderProbe {
    /// HTTP client
    client: reqwest::Client,
}

impl Default for HeaderProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderProbe {
    /// Create a probe with a default client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SizeProbe for HeaderProbe {
    fn name(&self) -> &str {
        "http-head"
    }

    async fn content_length(&self, url: &str) -> Result<i64> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .with_context(|| format!("Failed to send HEAD request to {}", url))?;

        if response.status() != StatusCode::OK {
            return Ok(0);
        }

        // Read the header directly: the body of a HEAD response is empty
        Ok(parse_content_length(
            response
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok()),
        ))
    }
}

/// Parse a Content-Length header value, 0 when absent or invalid
fn parse_content_length(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
