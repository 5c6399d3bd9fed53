use crate::OutputFormat;
use crate::config::Config;
use crate::stats::client::StatsClient;
use crate::stats::render;
use anyhow::{Context, Result};

/// Fetch one snapshot and print the recorded outage history
pub async fn show(
    config: &Config,
    url: Option<String>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let url = config.endpoint_url(url)?;
    let client = StatsClient::new(&url, config.monitor.timeout());

    let stats = client.fetch_stats().await?;
    let window = stats.recent_outages(limit);

    match format {
        OutputFormat::Text => println!("{}", render::history_table(&window)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&window).context("Failed to serialize history")?;
            println!("{}", json);
        }
    }

    Ok(())
}
