//! Graph document types and file I/O.

pub mod types;

pub use types::{GraphDocument, Link, Node};

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Read a graph document from `path`. An absent file is the fatal not-found
/// condition, not an empty document.
pub fn read_document(path: &Path) -> Result<GraphDocument, Error> {
    if !path.exists() {
        return Err(Error::GraphNotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write a graph document to `path` as 2-space-indented UTF-8 JSON with
/// non-ASCII characters preserved. Overwrites any existing file.
pub fn write_document(path: &Path, document: &GraphDocument) -> Result<(), Error> {
    let mut out = serde_json::to_string_pretty(document)?;
    out.push('\n');
    fs::write(path, out)?;
    Ok(())
}
