//! Core seismic event model, magnitude filtering and console formatting

mod config;
mod filter;
pub mod report;
mod time;
mod types;

pub use config::{Config, DEFAULT_FEED_URL, DEFAULT_MIN_MAGNITUDE, DEFAULT_OUTPUT_DIR};
pub use filter::filter_by_magnitude;
pub use time::{format_timestamp, format_timestamp_in, TimeFormat};
pub use types::{decimal, Event, Snapshot};
