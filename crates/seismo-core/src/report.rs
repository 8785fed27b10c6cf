//! Console report lines for a scan run

use crate::{decimal, format_timestamp, Event, TimeFormat};

pub const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Opening lines printed before the fetch
pub fn banner(min_magnitude: f64) -> String {
    format!(
        "🌊 Fetching data from USGS...\n🌊 Scanning the globe for quakes of {} Mag and above...\n",
        decimal(min_magnitude)
    )
}

pub fn raw_total_line(reported_count: u64) -> String {
    format!("Raw quake total (unfiltered): {reported_count}")
}

/// Block printed for the `counter`-th kept event of this run.
///
/// Coordinates read latitude first here; the KML export flips them.
pub fn alert_block(counter: usize, event: &Event, time_format: TimeFormat) -> String {
    [
        separator(),
        format!("🚨 SEISMIC ALERT #{counter}"),
        format!("📉 Magnitude: {}", decimal(event.magnitude)),
        format!("📍 Place: {}", event.place),
        format!(
            "🕒 Date/Time: {}",
            format_timestamp(event.time_ms, time_format)
        ),
        format!(
            "🧭 Coordinates: Lat {}, Long {}",
            decimal(event.latitude),
            decimal(event.longitude)
        ),
        format!("🌊 Depth: {} km", decimal(event.depth_km)),
        format!("🔗 Link: {}", event.url),
    ]
    .join("\n")
}

/// Closing line distinguishing an empty scan from one with matches
pub fn summary_line(matches: usize) -> String {
    if matches == 0 {
        "✅ No serious quakes detected in this period.".to_string()
    } else {
        format!("⚠️ Total critical events found: {matches}")
    }
}

pub fn dir_created_line(dir: &std::path::Path) -> String {
    format!("📁 Folder '{}' created.", dir.display())
}

pub fn saved_line(path: &std::path::Path) -> String {
    format!("✅ File saved successfully to: {}", path.display())
}

pub fn critical_error_line(cause: &dyn std::fmt::Display) -> String {
    format!("☠️ Critical system error: {cause}")
}

pub const CLOSE_PROMPT: &str = "\n✅ Press ENTER to close the radar...";
