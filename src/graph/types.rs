//! Serde types for the graph JSON document (`{ "nodes": [...], "links": [...] }`).
//!
//! The document is the exchange format between the two pipelines and the
//! downstream force-graph renderer. Fields the crate does not model are kept
//! in flattened maps so an edited document round-trips without loss.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Any other top-level keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// NODES
// =============================================================================

/// A node keyed by its unique trimmed `id`. Metadata fields (`Theme`,
/// `author`, `Description`, ...) live in the flattened map in column order;
/// a stub node carries nothing but the `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl Node {
    /// A node known only as a link target so far.
    pub fn stub(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            meta: Map::new(),
        }
    }
}

// =============================================================================
// LINKS
// =============================================================================

/// A link record. `source`/`target` stay raw [`Value`]s because existing
/// documents may carry non-string or absent endpoints; the dedup pass
/// normalizes them without rewriting the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<Value>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<Value>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    /// A directed link with an aggregated multiplicity, as the converter
    /// emits it.
    pub fn directed(source: &str, target: &str, value: u64) -> Self {
        Link {
            source: Some(Value::String(source.to_string())),
            target: Some(Value::String(target.to_string())),
            value: Some(Value::from(value)),
            extra: Map::new(),
        }
    }
}

/// Deserialize a field that must distinguish "absent" from an explicit JSON
/// `null` (plain `Option<Value>` collapses both to `None`).
fn nullable<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
