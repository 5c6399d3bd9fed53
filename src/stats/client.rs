use crate::error::StatsError;
use crate::stats::models::LinkStats;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

pub struct StatsClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl StatsClient {
    /// The endpoint URL is always passed in explicitly; there is no
    /// built-in default to fall back to.
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            timeout,
        }
    }

    /// Fetch one stats snapshot. One GET, no retry; a non-success status
    /// maps to an error that displays the HTTP reason phrase.
    pub async fn fetch_stats(&self) -> Result<LinkStats> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .context("Failed to reach stats endpoint")?;

        if !response.status().is_success() {
            return Err(StatsError::http(response.status()).into());
        }

        let stats = response
            .json::<LinkStats>()
            .await
            .context("Failed to parse stats response")?;

        Ok(stats)
    }
}
