//! Structured document loader for scheme definition files.

use std::path::Path;

use crate::error::ParseError;
use crate::types::SchemeDocument;

/// Decode one scheme file into a flat `key -> value` mapping.
///
/// Plain scalars keep their literal text, so an unquoted `base00: 000000`
/// decodes to `"000000"` rather than a number.
pub fn read_scheme_document(path: &Path) -> Result<SchemeDocument, ParseError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scheme_document(&contents).map_err(|source| ParseError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode scheme YAML already held in memory.
pub fn parse_scheme_document(contents: &str) -> Result<SchemeDocument, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}
