use seismo_core::{Config, TimeFormat};

/// Build a feed body in the USGS GeoJSON shape.
///
/// Each tuple is `(mag, place, time_ms, [lon, lat, depth], url)`.
pub fn feed_body(events: &[(f64, &str, i64, [f64; 3], &str)]) -> Vec<u8> {
    let features: Vec<serde_json::Value> = events
        .iter()
        .map(|(mag, place, time, coords, url)| {
            serde_json::json!({
                "type": "Feature",
                "properties": {
                    "mag": mag,
                    "place": place,
                    "time": time,
                    "url": url,
                },
                "geometry": { "type": "Point", "coordinates": coords },
            })
        })
        .collect();

    serde_json::to_vec(&serde_json::json!({
        "type": "FeatureCollection",
        "metadata": { "count": features.len() },
        "features": features,
    }))
    .unwrap()
}

pub fn sample_config(output_dir: &std::path::Path) -> Config {
    Config {
        output_dir: output_dir.to_path_buf(),
        time_format: TimeFormat::Utc,
        ..Config::new()
    }
}
