use serde::{Deserialize, Serialize};

/// One stats snapshot from the monitor daemon
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LinkStats {
    /// Seconds the current outage has lasted; negative = link is up
    #[serde(rename = "outageDuration")]
    pub outage_duration: i64,
    /// Past outages, oldest first; the last element is the most recent
    #[serde(rename = "outageHistory")]
    pub outage_history: Vec<OutageRecord>,
    pub ping: f64,
    pub uptime: u64, // seconds
    #[serde(rename = "linkUp")]
    pub link_up: u64, // seconds
    #[serde(rename = "resetCount")]
    pub reset_count: u64,
    #[serde(rename = "outageMax")]
    pub outage_max: u64, // seconds
    #[serde(rename = "outageAvg")]
    pub outage_avg: u64, // seconds
    #[serde(rename = "pingMax")]
    pub ping_max: f64,
    #[serde(rename = "pingAvg")]
    pub ping_avg: f64,
}

/// One entry of the outage history
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutageRecord {
    pub ago: i64, // seconds
    /// Seconds the outage lasted; non-positive = placeholder for a link
    /// that has never dropped
    pub length: i64,
}

impl LinkStats {
    /// An outage of zero seconds is still an outage; only the negative
    /// sentinel means the link is up.
    pub fn is_down(&self) -> bool {
        self.outage_duration >= 0
    }

    pub fn last_outage(&self) -> Option<&OutageRecord> {
        self.outage_history.last()
    }

    /// The trailing `limit` real outages, oldest first. Placeholder records
    /// (non-positive length) are skipped.
    pub fn recent_outages(&self, limit: usize) -> Vec<&OutageRecord> {
        let real: Vec<&OutageRecord> = self
            .outage_history
            .iter()
            .filter(|r| r.length > 0)
            .collect();
        let start = real.len().saturating_sub(limit);
        real[start..].to_vec()
    }
}
