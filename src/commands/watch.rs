use crate::config::Config;
use crate::stats::client::StatsClient;
use crate::stats::render;
use anyhow::Result;
use std::time::Duration;

/// Poll the monitor and print a fresh dashboard block per tick.
///
/// A failed tick prints the error where the dashboard would go and the loop
/// keeps polling; the next tick starts over with its own request. With
/// `count` the loop stops after that many polls, otherwise it runs until
/// interrupted.
pub async fn run(
    config: &Config,
    url: Option<String>,
    interval: Option<u64>,
    count: Option<u64>,
) -> Result<()> {
    let url = config.endpoint_url(url)?;
    let every = interval.unwrap_or(config.watch.interval_secs);
    if every == 0 {
        anyhow::bail!("Watch interval must be at least 1 second");
    }
    if count == Some(0) {
        anyhow::bail!("Watch count must be at least 1");
    }

    let client = StatsClient::new(&url, config.monitor.timeout());

    let mut polls: u64 = 0;
    loop {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        println!("--- {} ---", stamp);

        match client.fetch_stats().await {
            Ok(stats) => println!("{}", render::dashboard(&stats)),
            Err(e) => println!("{}", e),
        }
        println!();

        polls += 1;
        if let Some(limit) = count {
            if polls >= limit {
                break;
            }
        }

        tokio::time::sleep(Duration::from_secs(every)).await;
    }

    Ok(())
}
