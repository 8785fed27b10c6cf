use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use seismo_core::{Config, TimeFormat};

#[derive(Parser)]
#[command(name = "seismo")]
#[command(version)]
#[command(about = "Scan the USGS earthquake feed and pin strong quakes to a KML map")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scan options when no subcommand is given
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed, report strong quakes and export them (default)
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Minimum magnitude to report, inclusive [default: 4.5]
    #[arg(long, value_name = "MAG", value_parser = parse_magnitude)]
    pub min_magnitude: Option<f64>,

    /// Directory receiving terremotos_NNN.kml [default: pins]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// GeoJSON feed to scan [default: USGS all_day]
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Render event times in UTC instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Exit without waiting for ENTER
    #[arg(long)]
    pub no_wait: bool,
}

impl ScanArgs {
    /// Overlay the given flags onto the default configuration
    pub fn to_config(&self) -> Config {
        let mut config = Config::new();
        if let Some(min_magnitude) = self.min_magnitude {
            config.min_magnitude = min_magnitude;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = &self.feed_url {
            config.feed_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if self.utc {
            config.time_format = TimeFormat::Utc;
        }
        config
    }
}

fn parse_magnitude(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("magnitude must be a finite number".to_string())
    }
}
