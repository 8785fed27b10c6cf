//! Versioned file writer

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use seismo_core::{Event, TimeFormat};

use crate::{file_name, lowest_free_index, render_document, taken_indices, ExportError};

/// A KML file written by [`export_events`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub index: u32,
    pub path: PathBuf,
    pub placemarks: usize,
}

/// Create `dir` if it is missing. Returns whether it had to be created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, ExportError> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(dir = %dir.display(), "created output directory");
    Ok(true)
}

/// Write `events` to the lowest unused `terremotos_NNN.kml` in `dir`.
///
/// The file is opened with `create_new`, so an index claimed by a concurrent
/// writer after the directory scan is skipped instead of overwritten.
pub fn export_events(
    events: &[Event],
    dir: &Path,
    time_format: TimeFormat,
) -> Result<ExportFile, ExportError> {
    if events.is_empty() {
        return Err(ExportError::NoEvents);
    }

    ensure_output_dir(dir)?;

    let mut taken = taken_indices(dir)?;
    loop {
        let index = lowest_free_index(&taken);
        let path = dir.join(file_name(index));

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                tracing::warn!(index, path = %path.display(), "index claimed concurrently, trying next");
                taken.insert(index);
                continue;
            }
            Err(source) => return Err(ExportError::Write { path, source }),
        };

        let document = render_document(index, events, time_format);
        let written = file
            .write_all(document.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);
        if let Err(source) = written {
            let _ = std::fs::remove_file(&path);
            return Err(ExportError::Write { path, source });
        }

        tracing::info!(index, path = %path.display(), placemarks = events.len(), "export written");
        return Ok(ExportFile {
            index,
            path,
            placemarks: events.len(),
        });
    }
}
