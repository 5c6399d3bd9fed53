use crate::config::{self, Config};
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    // Config derives Serialize, so the active settings print as TOML
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Walk the dotted key path over a Value view of the config
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Support dot notation: "monitor.url"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config::config_path()?;
    // A missing file starts from defaults, but an existing file that fails
    // to parse must not be silently replaced.
    let mut config = if path.exists() {
        config::load_from_path(&path)?
    } else {
        Config::default()
    };

    match key {
        "monitor.url" => config.monitor.url = value.to_string(),
        "monitor.timeout_secs" => {
            config.monitor.timeout_secs = value
                .parse()
                .context("monitor.timeout_secs must be a whole number of seconds")?;
        }
        "watch.interval_secs" => {
            config.watch.interval_secs = value
                .parse()
                .context("watch.interval_secs must be a whole number of seconds")?;
        }
        _ => anyhow::bail!(
            "Unknown config key '{}'. Known keys: monitor.url, monitor.timeout_secs, watch.interval_secs",
            key
        ),
    }

    config.validate()?;
    config::save_to_path(&config, &path)?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}
