//! Versioned file names and suffix allocation

use std::collections::BTreeSet;
use std::path::Path;

use crate::ExportError;

pub const FILE_PREFIX: &str = "terremotos_";
pub const FILE_EXTENSION: &str = "kml";

/// `terremotos_NNN.kml`, zero-padded to at least three digits
pub fn file_name(index: u32) -> String {
    format!("{FILE_PREFIX}{index:03}.{FILE_EXTENSION}")
}

/// Inverse of [`file_name`]. Only names it would produce are recognized.
pub fn parse_index(name: &str) -> Option<u32> {
    let digits = name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_EXTENSION)?
        .strip_suffix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u32 = digits.parse().ok()?;
    (index > 0 && file_name(index) == name).then_some(index)
}

/// Lowest positive integer not present in `taken`
pub fn lowest_free_index(taken: &BTreeSet<u32>) -> u32 {
    let mut candidate = 1;
    for &index in taken.range(1..) {
        if index != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Suffixes already used in `dir`. A missing directory has none.
pub fn taken_indices(dir: &Path) -> Result<BTreeSet<u32>, ExportError> {
    if !dir.exists() {
        return Ok(BTreeSet::new());
    }

    let read_err = |source| ExportError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut taken = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if let Some(index) = entry.file_name().to_str().and_then(parse_index) {
            taken.insert(index);
        }
    }
    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_padding() {
        assert_eq!(file_name(1), "terremotos_001.kml");
        assert_eq!(file_name(42), "terremotos_042.kml");
        assert_eq!(file_name(1234), "terremotos_1234.kml");
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("terremotos_001.kml"), Some(1));
        assert_eq!(parse_index("terremotos_1234.kml"), Some(1234));
        assert_eq!(parse_index("terremotos_1.kml"), None);
        assert_eq!(parse_index("terremotos_000.kml"), None);
        assert_eq!(parse_index("terremotos_001.kml.tmp"), None);
        assert_eq!(parse_index("terremotos_00a.kml"), None);
        assert_eq!(parse_index("notes.txt"), None);
    }

    #[test]
    fn test_lowest_free_index() {
        assert_eq!(lowest_free_index(&BTreeSet::new()), 1);
        assert_eq!(lowest_free_index(&BTreeSet::from([1, 2])), 3);
        assert_eq!(lowest_free_index(&BTreeSet::from([2, 3])), 1);
        assert_eq!(lowest_free_index(&BTreeSet::from([1, 3, 4])), 2);
        assert_eq!(lowest_free_index(&BTreeSet::from([0, 1])), 2);
    }

    #[test]
    fn test_taken_indices_missing_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let taken = taken_indices(&temp.path().join("absent")).unwrap();
        assert!(taken.is_empty());
    }

    #[test]
    fn test_taken_indices_ignores_foreign_files() {
        let temp = tempfile::TempDir::new().unwrap();
        for name in ["terremotos_001.kml", "terremotos_003.kml", "readme.md", "terremotos_2.kml"] {
            std::fs::write(temp.path().join(name), "").unwrap();
        }
        let taken = taken_indices(temp.path()).unwrap();
        assert_eq!(taken, BTreeSet::from([1, 3]));
    }
}
