//! Versioned KML export of seismic events

mod error;
mod kml;
mod naming;
mod writer;

pub use error::ExportError;
pub use kml::{escape_xml, render_document};
pub use naming::{
    file_name, lowest_free_index, parse_index, taken_indices, FILE_EXTENSION, FILE_PREFIX,
};
pub use writer::{ensure_output_dir, export_events, ExportFile};
