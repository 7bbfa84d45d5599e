//! Spreadsheet discovery and parsing.

pub mod table;

pub use table::{Cell, RowView, Sheet};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Find the spreadsheet to convert: the first `*.csv` file in `dir`, in
/// directory order. Which file wins when several match is filesystem-dependent
/// and accepted; zero matches is fatal.
pub fn discover_spreadsheet(dir: &Path) -> Result<PathBuf, Error> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            return Ok(path);
        }
    }
    Err(Error::SpreadsheetNotFound(dir.to_path_buf()))
}
