use crate::duration::dhms;
use crate::stats::models::{LinkStats, OutageRecord};

/// Render the dashboard block for one snapshot.
///
/// Line rules follow the monitor's display conventions: `DOWN` carries the
/// running outage duration, the last-outage pair falls back to `NEVER` when
/// no outage was ever recorded, and the ping column is masked with `???`
/// while the link is down (there is no ping to report mid-outage).
pub fn dashboard(stats: &LinkStats) -> String {
    let mut lines = Vec::new();

    if stats.is_down() {
        lines.push(format!(
            "{:<12} DOWN {}",
            "Status:",
            dhms(stats.outage_duration as u64)
        ));
    } else {
        lines.push(format!("{:<12} OK", "Status:"));
    }

    match stats.last_outage() {
        Some(last) if last.length > 0 => {
            lines.push(format!(
                "{:<12} {} ago",
                "Last outage:",
                dhms(last.ago.max(0) as u64)
            ));
            lines.push(format!("{:<12} {}", "Lasted:", dhms(last.length as u64)));
        }
        _ => {
            lines.push(format!("{:<12} NEVER", "Last outage:"));
            lines.push(format!("{:<12} {}", "Lasted:", dhms(0)));
        }
    }

    if stats.is_down() {
        lines.push(format!("{:<12} ???", "Ping:"));
    } else {
        lines.push(format!("{:<12} {}", "Ping:", stats.ping));
    }

    lines.push(format!("{:<12} {}", "Uptime:", dhms(stats.uptime)));
    lines.push(format!("{:<12} {}", "Link up:", dhms(stats.link_up)));
    lines.push(format!("{:<12} {}", "Resets:", stats.reset_count));
    lines.push(format!("{:<12} {}", "Outage max:", dhms(stats.outage_max)));
    lines.push(format!("{:<12} {}", "Outage avg:", dhms(stats.outage_avg)));
    lines.push(format!("{:<12} {}", "Ping max:", stats.ping_max));
    lines.push(format!("{:<12} {}", "Ping avg:", stats.ping_avg));

    lines.join("\n")
}

/// Render a window of real outage records as an aligned table, oldest
/// first, with a summary line.
pub fn history_table(window: &[&OutageRecord]) -> String {
    if window.is_empty() {
        return "No outages recorded.".to_string();
    }

    let mut lines = Vec::new();
    lines.push(format!("{:<20} {:<14}", "When", "Duration"));
    lines.push("-".repeat(34));

    for record in window {
        lines.push(format!(
            "{:<20} {:<14}",
            format!("{} ago", dhms(record.ago.max(0) as u64)),
            dhms(record.length.max(0) as u64)
        ));
    }

    let total: u64 = window.iter().map(|r| r.length.max(0) as u64).sum();
    lines.push(String::new());
    lines.push(format!("Total: {} ({} outages)", dhms(total), window.len()));

    lines.join("\n")
}
