//! Configuration for a scan run

use std::path::PathBuf;
use std::time::Duration;

use crate::TimeFormat;

/// USGS summary feed covering the past day
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

pub const DEFAULT_MIN_MAGNITUDE: f64 = 4.5;

pub const DEFAULT_OUTPUT_DIR: &str = "pins";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scan configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Inclusive magnitude threshold (>= this = reported and exported)
    pub min_magnitude: f64,

    /// Directory that receives the versioned KML files
    pub output_dir: PathBuf,

    /// GeoJSON feed endpoint
    pub feed_url: String,

    /// Upper bound on the whole HTTP request
    pub timeout: Duration,

    /// Timezone used when rendering event times
    pub time_format: TimeFormat,
}

impl Config {
    pub fn new() -> Self {
        Self {
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            time_format: TimeFormat::Local,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.min_magnitude, 4.5);
        assert_eq!(config.output_dir, PathBuf::from("pins"));
        assert!(config.feed_url.ends_with("all_day.geojson"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.time_format, TimeFormat::Local);
    }
}
