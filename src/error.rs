use reqwest::StatusCode;
use thiserror::Error;

/// Errors the stats commands surface to the user.
///
/// Everything else in the crate travels as `anyhow::Error` with context;
/// these two carry meaning the commands and tests inspect.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Non-success response from the stats endpoint. The display string is
    /// the HTTP reason phrase, which is what the dashboard shows for a
    /// failed fetch.
    #[error("{reason}")]
    Http { status: u16, reason: String },

    /// No endpoint URL on the command line or in the config file.
    #[error("stats endpoint not configured; run 'lks config set monitor.url <URL>' or pass --url")]
    NoEndpoint,
}

impl StatsError {
    pub fn http(status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        StatsError::Http {
            status: status.as_u16(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_reason_phrase() {
        let err = StatsError::http(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found");

        let err = StatsError::http(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_http_error_without_reason_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = StatsError::http(status);
        assert_eq!(err.to_string(), "HTTP 599");
    }

    #[test]
    fn test_http_error_keeps_status_code() {
        match StatsError::http(StatusCode::BAD_GATEWAY) {
            StatsError::Http { status, .. } => assert_eq!(status, 502),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
