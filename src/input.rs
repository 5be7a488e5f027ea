//! Input loading
//!
//! Reads a facets document from a file or stdin and decodes it.

use std::io::Read;
use std::path::Path;

use crate::error::FacetStatsError;
use crate::stats::{FacetValueStats, parse_facets};

/// Load facet value stats from a file, or from stdin when no path is given
pub fn load_facets(path: Option<&Path>) -> Result<Vec<FacetValueStats>, FacetStatsError> {
    let contents = match path {
        Some(path) => load_file(path)?,
        None => load_stdin()?,
    };
    let facets = parse_facets(&contents)?;
    log::debug!("Decoded {} facet values", facets.len());
    Ok(facets)
}

fn load_file(path: &Path) -> Result<String, FacetStatsError> {
    log::debug!("Reading facets document from {:?}", path);
    std::fs::read_to_string(path)
        .map_err(|e| FacetStatsError::Io(format!("{}: {}", path.display(), e)))
}

fn load_stdin() -> Result<String, FacetStatsError> {
    log::debug!("Reading facets document from stdin");
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_facets_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"red": {{"min": "1.0"}}, "blue": {{}}}}"#).unwrap();

        let facets = load_facets(Some(file.path())).unwrap();

        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].value(), "red");
        assert!(facets[1].is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_facets(Some(&path)).unwrap_err();
        match err {
            FacetStatsError::Io(message) => assert!(message.contains("missing.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_facets(Some(file.path())).unwrap_err();
        assert!(matches!(err, FacetStatsError::InvalidJson(_)));
    }
}
