//! Spreadsheet → graph document conversion.
//!
//! One pass over the rows builds both nodes and links: each row inserts its
//! full node record (promoting any stub created earlier by a link target) and
//! then contributes directed edges parsed from its link field.

pub mod builder;
pub mod text;

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::{Diagnostic, Error};
use crate::graph::{self, GraphDocument, Node};
use crate::sheet::{self, Cell, RowView, Sheet};
use builder::GraphAssembler;

pub const ID_COLUMN: &str = "ID";
pub const LINK_COLUMN: &str = "Link";
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Metadata columns copied onto a node, in output order. Only columns present
/// in the sheet schema appear on the node at all.
pub const METADATA_COLUMNS: [&str; 8] = [
    "Theme",
    "category",
    "author",
    "title",
    "year",
    "publisher",
    "URL",
    DESCRIPTION_COLUMN,
];

/// File locations for one converter run. Defaults reproduce the legacy
/// zero-argument behavior: search the current directory, write `graph.json`
/// next to it.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            input_dir: PathBuf::from("."),
            output: PathBuf::from("graph.json"),
        }
    }
}

pub struct ConvertOutcome {
    pub document: GraphDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a full file-to-file run.
pub struct ConvertRun {
    /// The spreadsheet that was discovered and converted.
    pub spreadsheet: PathBuf,
    pub document: GraphDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Discover the spreadsheet, convert it, and write the graph document.
pub fn run(options: &ConvertOptions) -> Result<ConvertRun, Error> {
    let spreadsheet = sheet::discover_spreadsheet(&options.input_dir)?;
    let parsed = Sheet::read(&spreadsheet)?;
    let outcome = convert(&parsed)?;
    graph::write_document(&options.output, &outcome.document)?;
    Ok(ConvertRun {
        spreadsheet,
        document: outcome.document,
        diagnostics: outcome.diagnostics,
    })
}

/// Convert a parsed sheet into a graph document.
///
/// Rows without a usable id are skipped entirely (diagnostic `C001`). A
/// second full row for an id is ignored for node creation but still counted
/// for links (diagnostic `C002`).
pub fn convert(sheet: &Sheet) -> Result<ConvertOutcome, Error> {
    if !sheet.has_column(ID_COLUMN) {
        return Err(Error::MissingColumn(ID_COLUMN.to_string()));
    }

    let mut assembler = GraphAssembler::new();
    let mut diagnostics = Vec::new();

    for row in sheet.rows() {
        let id = row.cell(ID_COLUMN).as_text().and_then(text::normalize_id);
        let Some(id) = id else {
            diagnostics.push(Diagnostic::convert(
                "C001",
                format!("row {} skipped: empty or missing id", row.number),
                None,
            ));
            continue;
        };

        if !assembler.insert_full(build_node(sheet, &row, &id)) {
            diagnostics.push(Diagnostic::convert(
                "C002",
                "duplicate row for existing node ignored",
                Some(format!("node '{id}'")),
            ));
        }

        if let Some(raw) = row.cell(LINK_COLUMN).as_text() {
            for target in text::split_link_field(raw) {
                assembler.record_link(&id, &target);
            }
        }
    }

    Ok(ConvertOutcome {
        document: assembler.finish(),
        diagnostics,
    })
}

fn build_node(sheet: &Sheet, row: &RowView<'_>, id: &str) -> Node {
    let mut meta = Map::new();
    for column in METADATA_COLUMNS {
        if !sheet.has_column(column) {
            continue;
        }
        let value = match row.cell(column) {
            Cell::Missing => Value::Null,
            Cell::Text(raw) if column == DESCRIPTION_COLUMN => {
                Value::String(text::description_html(raw))
            }
            Cell::Text(raw) => text::scalar_value(raw),
        };
        meta.insert(column.to_string(), value);
    }
    Node {
        id: id.to_string(),
        meta,
    }
}
