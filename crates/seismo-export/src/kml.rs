//! KML document rendering

use std::borrow::Cow;

use seismo_core::{decimal, format_timestamp, Event, TimeFormat};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Escape the five XML special characters in text content
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn placemark(event: &Event, time_format: TimeFormat) -> String {
    let name = format!("Mag {} - {}", decimal(event.magnitude), event.place);
    let description = format!(
        "Date: {}\nLink: {}",
        format_timestamp(event.time_ms, time_format),
        event.url
    );
    format!(
        "  <Placemark>\n    <name>{}</name>\n    <description>{}</description>\n    <Point>\n      <coordinates>{}</coordinates>\n    </Point>\n  </Placemark>\n",
        escape_xml(&name),
        escape_xml(&description),
        event.kml_coordinates()
    )
}

/// Render the full document for export number `index`
pub fn render_document(index: u32, events: &[Event], time_format: TimeFormat) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!("<kml xmlns=\"{KML_NAMESPACE}\">\n"));
    doc.push_str("<Document>\n");
    doc.push_str(&format!("  <name>Seismic Monitoring #{index}</name>\n"));
    for event in events {
        doc.push_str(&placemark(event, time_format));
    }
    doc.push_str("</Document>\n</kml>\n");
    doc
}
