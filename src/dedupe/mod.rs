//! Undirected link deduplication over an existing graph document.
//!
//! Links are compared by their normalized endpoint pair regardless of
//! direction; the first occurrence of a pair is kept byte-for-byte and all
//! later ones dropped, as are self-links. Nodes and unknown top-level fields
//! pass through untouched.

use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{Diagnostic, Error};
use crate::graph::{self, GraphDocument, Link};

/// Endpoint substituted for an absent or null `source`/`target`. Entries
/// missing both endpoints normalize to a self-link and drop together.
pub const MISSING_ENDPOINT: &str = "null";

/// File location for one dedup run. The default is the legacy fixed path in
/// the current directory; the cleaned document overwrites the same file.
#[derive(Debug, Clone)]
pub struct DedupeOptions {
    pub graph_path: PathBuf,
}

impl Default for DedupeOptions {
    fn default() -> Self {
        DedupeOptions {
            graph_path: PathBuf::from("graph.json"),
        }
    }
}

pub struct DedupeOutcome {
    pub document: GraphDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a full file-to-file run.
pub struct DedupeRun {
    /// Link count before deduplication.
    pub original_links: usize,
    pub document: GraphDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read the document, deduplicate its links, and write it back in place.
pub fn run(options: &DedupeOptions) -> Result<DedupeRun, Error> {
    let document = graph::read_document(&options.graph_path)?;
    let original_links = document.links.len();
    let outcome = dedupe(document);
    graph::write_document(&options.graph_path, &outcome.document)?;
    Ok(DedupeRun {
        original_links,
        document: outcome.document,
        diagnostics: outcome.diagnostics,
    })
}

/// Deduplicate the document's links in original order.
///
/// Self-links drop unconditionally (`D001`); a repeated unordered pair drops
/// in either direction (`D002`); an absent endpoint is coerced to
/// [`MISSING_ENDPOINT`] for comparison (`D003`) without rewriting the record.
pub fn dedupe(mut document: GraphDocument) -> DedupeOutcome {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(document.links.len());
    let mut diagnostics = Vec::new();

    for link in std::mem::take(&mut document.links) {
        let source = normalize_endpoint(link.source.as_ref());
        let target = normalize_endpoint(link.target.as_ref());

        if endpoint_missing(&link.source) || endpoint_missing(&link.target) {
            diagnostics.push(Diagnostic::dedupe(
                "D003",
                format!("link endpoint missing, compared as '{MISSING_ENDPOINT}'"),
                Some(subject(&source, &target)),
            ));
        }

        if source == target {
            diagnostics.push(Diagnostic::dedupe(
                "D001",
                "self-link dropped",
                Some(format!("node '{source}'")),
            ));
            continue;
        }

        if seen.insert(unordered_pair(&source, &target)) {
            kept.push(link);
        } else {
            diagnostics.push(Diagnostic::dedupe(
                "D002",
                "duplicate undirected link dropped",
                Some(subject(&source, &target)),
            ));
        }
    }

    document.links = kept;
    DedupeOutcome {
        document,
        diagnostics,
    }
}

/// Normalize an endpoint for comparison: trimmed string for string values,
/// JSON rendering for other scalars (so `1` and `"1"` collide), the missing
/// sentinel when absent or null.
fn normalize_endpoint(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_ENDPOINT.to_string(),
        Some(Value::String(raw)) => raw.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

fn endpoint_missing(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn unordered_pair(source: &str, target: &str) -> (String, String) {
    if source <= target {
        (source.to_string(), target.to_string())
    } else {
        (target.to_string(), source.to_string())
    }
}

fn subject(source: &str, target: &str) -> String {
    format!("link '{source}' -> '{target}'")
}

/// True when no two links share a normalized endpoint pair and no link is a
/// self-link. `dedupe` establishes this; running it again changes nothing.
pub fn is_deduped(links: &[Link]) -> bool {
    let mut seen = HashSet::new();
    links.iter().all(|link| {
        let source = normalize_endpoint(link.source.as_ref());
        let target = normalize_endpoint(link.target.as_ref());
        source != target && seen.insert(unordered_pair(&source, &target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_trims_strings() {
        assert_eq!(normalize_endpoint(Some(&json!("  A "))), "A");
    }

    #[test]
    fn normalize_renders_scalars() {
        assert_eq!(normalize_endpoint(Some(&json!(1))), "1");
        assert_eq!(normalize_endpoint(Some(&json!(true))), "true");
    }

    #[test]
    fn normalize_substitutes_sentinel() {
        assert_eq!(normalize_endpoint(None), MISSING_ENDPOINT);
        assert_eq!(normalize_endpoint(Some(&Value::Null)), MISSING_ENDPOINT);
    }

    #[test]
    fn unordered_pair_is_canonical() {
        assert_eq!(unordered_pair("B", "A"), unordered_pair("A", "B"));
    }
}
