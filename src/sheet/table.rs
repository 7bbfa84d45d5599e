//! In-memory tabular model for a parsed spreadsheet.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Error;

/// One spreadsheet cell. An empty field is `Missing` rather than an empty
/// string, so downstream code handles absence explicitly instead of testing
/// truthiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Missing,
    Text(String),
}

impl Cell {
    fn from_field(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Missing => None,
            Cell::Text(raw) => Some(raw),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// A parsed spreadsheet: trimmed header names plus rows of cells.
#[derive(Debug, Clone)]
pub struct Sheet {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn read(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
        let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns: Vec<String> = csv
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();
        let index = columns
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();

        let mut rows = Vec::new();
        for record in csv.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from_field).collect());
        }

        Ok(Sheet {
            columns,
            index,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().enumerate().map(|(position, cells)| RowView {
            sheet: self,
            cells,
            number: position + 1,
        })
    }
}

/// A borrowed view of one data row; `number` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    sheet: &'a Sheet,
    cells: &'a [Cell],
    pub number: usize,
}

impl<'a> RowView<'a> {
    /// Cell under `column`; `Missing` when the column does not exist or the
    /// row is short.
    pub fn cell(&self, column: &str) -> &'a Cell {
        const MISSING: &Cell = &Cell::Missing;
        match self.sheet.index.get(column) {
            Some(&position) => self.cells.get(position).unwrap_or(MISSING),
            None => MISSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(raw: &str) -> Sheet {
        Sheet::from_reader(raw.as_bytes()).expect("csv should parse")
    }

    #[test]
    fn headers_are_trimmed() {
        let s = sheet(" ID ,Link\nA,B\n");
        assert!(s.has_column("ID"));
        assert!(s.has_column("Link"));
        assert!(!s.has_column(" ID "));
    }

    #[test]
    fn empty_field_is_missing() {
        let s = sheet("ID,Link\nA,\n");
        let row = s.rows().next().unwrap();
        assert_eq!(row.cell("ID"), &Cell::Text("A".into()));
        assert!(row.cell("Link").is_missing());
    }

    #[test]
    fn short_rows_pad_with_missing() {
        let s = sheet("ID,Link,author\nA\n");
        let row = s.rows().next().unwrap();
        assert!(row.cell("Link").is_missing());
        assert!(row.cell("author").is_missing());
    }

    #[test]
    fn unknown_column_is_missing() {
        let s = sheet("ID\nA\n");
        let row = s.rows().next().unwrap();
        assert!(row.cell("publisher").is_missing());
    }

    #[test]
    fn quoted_multiline_cell_survives() {
        let s = sheet("ID,Description\nA,\"line1\nline2\"\n");
        let row = s.rows().next().unwrap();
        assert_eq!(row.cell("Description").as_text(), Some("line1\nline2"));
    }
}
