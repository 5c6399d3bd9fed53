use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkstat::OutputFormat;
use linkstat::commands;
use linkstat::config;

#[derive(Parser)]
#[command(name = "lks")]
#[command(about = "Terminal dashboard for a link outage monitor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display the current link status
    Status {
        #[arg(long, help = "Stats endpoint URL (overrides config)")]
        url: Option<String>,
        #[arg(long, value_enum, default_value_t, help = "Output format")]
        format: OutputFormat,
    },
    /// Poll the monitor and print the dashboard on an interval
    Watch {
        #[arg(long, help = "Stats endpoint URL (overrides config)")]
        url: Option<String>,
        #[arg(long, help = "Seconds between polls (overrides config)")]
        interval: Option<u64>,
        #[arg(long, help = "Stop after this many polls")]
        count: Option<u64>,
    },
    /// Show the recorded outage history
    History {
        #[arg(long, help = "Stats endpoint URL (overrides config)")]
        url: Option<String>,
        #[arg(long, default_value = "20", help = "Most recent outages to show")]
        limit: usize,
        #[arg(long, value_enum, default_value_t, help = "Output format")]
        format: OutputFormat,
    },
    /// Inspect or edit configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|_| {
        // Missing config is fine for --url runs and for 'config set'
        eprintln!("Warning: No config found. Run 'lks config set monitor.url <URL>'");
        config::Config::default()
    });

    match &cli.command {
        Commands::Status { url, format } => {
            tokio::runtime::Runtime::new()?.block_on(commands::status::show(
                &config,
                url.clone(),
                *format,
            ))?;
        }
        Commands::Watch {
            url,
            interval,
            count,
        } => {
            tokio::runtime::Runtime::new()?.block_on(commands::watch::run(
                &config,
                url.clone(),
                *interval,
                *count,
            ))?;
        }
        Commands::History { url, limit, format } => {
            tokio::runtime::Runtime::new()?.block_on(commands::history::show(
                &config,
                url.clone(),
                *limit,
                *format,
            ))?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
