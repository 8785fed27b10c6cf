//! GeoJSON wire format of the USGS summary feeds

use seismo_core::{Event, Snapshot};
use serde::Deserialize;

use crate::FeedError;

#[derive(Deserialize)]
struct FeedResponse {
    metadata: Metadata,
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Metadata {
    count: u64,
}

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Properties {
    mag: Option<f64>,
    #[serde(default)]
    place: Option<String>,
    time: i64,
    url: String,
}

#[derive(Deserialize)]
struct Geometry {
    /// `[longitude, latitude, depth]`
    coordinates: Vec<f64>,
}

/// Decode a feed body into a [`Snapshot`].
///
/// Features without a magnitude are dropped; they can never pass a threshold.
pub fn parse_snapshot(body: &[u8]) -> Result<Snapshot, FeedError> {
    let data: FeedResponse =
        serde_json::from_slice(body).map_err(|e| FeedError::Malformed(e.to_string()))?;

    let mut events = Vec::with_capacity(data.features.len());
    for (position, feature) in data.features.into_iter().enumerate() {
        let Some(magnitude) = feature.properties.mag else {
            tracing::debug!(position, url = %feature.properties.url, "skipping feature without magnitude");
            continue;
        };
        let [longitude, latitude, depth_km] = match feature.geometry.coordinates[..] {
            [lon, lat, depth, ..] => [lon, lat, depth],
            _ => {
                return Err(FeedError::Malformed(format!(
                    "feature {position}: expected [longitude, latitude, depth], got {} values",
                    feature.geometry.coordinates.len()
                )))
            }
        };
        events.push(Event {
            magnitude,
            place: feature.properties.place.unwrap_or_default(),
            time_ms: feature.properties.time,
            longitude,
            latitude,
            depth_km,
            url: feature.properties.url,
        });
    }

    Ok(Snapshot {
        reported_count: data.metadata.count,
        events,
    })
}
