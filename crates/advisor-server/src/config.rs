use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub analysis_delay: Duration,
}

impl Config {
    /// Optional:
    /// - `ADVISOR_LISTEN_ADDR` (default: "0.0.0.0:3000")
    /// - `ANALYSIS_DELAY_MS` (default: 1500): artificial latency on the mock
    ///   image analysis
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr = std::env::var("ADVISOR_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let analysis_delay = match std::env::var("ANALYSIS_DELAY_MS") {
            Ok(raw) => {
                let ms = raw.parse::<u64>().map_err(|_| {
                    AppError::Config(format!("ANALYSIS_DELAY_MS must be an integer, got: {raw}"))
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(1500),
        };

        Ok(Self {
            listen_addr,
            analysis_delay,
        })
    }
}
