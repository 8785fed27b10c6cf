//! Core types for seismic event reports

/// A single seismic reading taken from the feed
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub magnitude: f64,
    pub place: String,
    /// Origin time in epoch milliseconds
    pub time_ms: i64,
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    /// Detail page on the feed provider
    pub url: String,
}

impl Event {
    /// `longitude,latitude` pair as KML expects it
    pub fn kml_coordinates(&self) -> String {
        format!("{},{}", decimal(self.longitude), decimal(self.latitude))
    }
}

/// One fetched feed: the provider's raw count plus every event in feed order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Total reported by the feed before any filtering
    pub reported_count: u64,
    pub events: Vec<Event>,
}

/// Render a decimal in shortest round-trip form, keeping `.0` on integral values
pub fn decimal(value: f64) -> String {
    format!("{value:?}")
}
