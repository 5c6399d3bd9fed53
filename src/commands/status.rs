use crate::OutputFormat;
use crate::config::Config;
use crate::stats::client::StatsClient;
use crate::stats::render;
use anyhow::{Context, Result};

/// Fetch one snapshot and print it
pub async fn show(config: &Config, url: Option<String>, format: OutputFormat) -> Result<()> {
    let url = config.endpoint_url(url)?;
    let client = StatsClient::new(&url, config.monitor.timeout());

    let stats = client.fetch_stats().await?;

    match format {
        OutputFormat::Text => println!("{}", render::dashboard(&stats)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
            println!("{}", json);
        }
    }

    Ok(())
}
