#![allow(dead_code)]

use bibgraph::convert::{self, ConvertOutcome};
use bibgraph::graph::{GraphDocument, Link, Node};
use bibgraph::sheet::Sheet;
use serde_json::{Map, Value};

// =============================================================================
// Sheet / conversion builders
// =============================================================================

pub fn sheet(raw: &str) -> Sheet {
    Sheet::from_reader(raw.as_bytes()).expect("csv should parse")
}

pub fn convert_csv(raw: &str) -> ConvertOutcome {
    convert::convert(&sheet(raw)).expect("conversion should succeed")
}

// =============================================================================
// Document builders
// =============================================================================

pub fn document(links: Vec<Link>) -> GraphDocument {
    GraphDocument {
        links,
        ..GraphDocument::default()
    }
}

pub fn link(source: &str, target: &str) -> Link {
    Link::directed(source, target, 1)
}

/// A link whose endpoints are arbitrary JSON values (or absent).
pub fn raw_link(source: Option<Value>, target: Option<Value>) -> Link {
    Link {
        source,
        target,
        value: None,
        extra: Map::new(),
    }
}

pub fn node_with_meta(id: &str) -> Node {
    let mut meta = Map::new();
    meta.insert("title".into(), Value::String(format!("Title {id}")));
    Node {
        id: id.into(),
        meta,
    }
}

// =============================================================================
// Accessors
// =============================================================================

pub fn node<'a>(document: &'a GraphDocument, id: &str) -> &'a Node {
    document
        .nodes
        .iter()
        .find(|node| node.id == id)
        .unwrap_or_else(|| panic!("node '{id}' should exist"))
}

pub fn node_ids(document: &GraphDocument) -> Vec<&str> {
    document.nodes.iter().map(|node| node.id.as_str()).collect()
}

/// (source, target, value) of a converter-emitted link.
pub fn link_tuple(link: &Link) -> (String, String, u64) {
    let endpoint = |value: &Option<Value>| {
        value
            .as_ref()
            .and_then(Value::as_str)
            .expect("endpoint should be a string")
            .to_string()
    };
    let value = link
        .value
        .as_ref()
        .and_then(Value::as_u64)
        .expect("value should be an integer");
    (endpoint(&link.source), endpoint(&link.target), value)
}

pub fn link_tuples(document: &GraphDocument) -> Vec<(String, String, u64)> {
    document.links.iter().map(link_tuple).collect()
}
