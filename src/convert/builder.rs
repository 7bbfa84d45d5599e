//! petgraph-backed assembly structure for the converter.
//!
//! Node and edge insertion order is what the output order of the document is
//! derived from, so everything goes through one `DiGraph` plus an id → index
//! map.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::{GraphDocument, Link, Node};

pub struct GraphAssembler {
    graph: DiGraph<Node, u64>,
    node_indices: HashMap<String, NodeIndex>,
    /// Ids whose full record has been inserted (everything else is a stub).
    full: HashSet<String>,
}

impl GraphAssembler {
    pub fn new() -> Self {
        GraphAssembler {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            full: HashSet::new(),
        }
    }

    /// Insert the full record for a row's node. A stub under the same id is
    /// promoted in place, keeping its first-appearance slot. Returns `false`
    /// when a full record already exists; the existing record wins.
    pub fn insert_full(&mut self, node: Node) -> bool {
        if self.full.contains(&node.id) {
            return false;
        }
        let id = node.id.clone();
        match self.node_indices.get(&id) {
            Some(&index) => {
                if let Some(slot) = self.graph.node_weight_mut(index) {
                    *slot = node;
                }
            }
            None => {
                let index = self.graph.add_node(node);
                self.node_indices.insert(id.clone(), index);
            }
        }
        self.full.insert(id);
        true
    }

    /// Count one observation of the directed pair (source, target), creating
    /// stub nodes for endpoints not seen yet. Reversed pairs stay distinct.
    pub fn record_link(&mut self, source: &str, target: &str) {
        let source_index = self.ensure_node(source);
        let target_index = self.ensure_node(target);
        match self.graph.find_edge(source_index, target_index) {
            Some(edge) => {
                if let Some(count) = self.graph.edge_weight_mut(edge) {
                    *count += 1;
                }
            }
            None => {
                self.graph.add_edge(source_index, target_index, 1);
            }
        }
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.node_indices.get(id) {
            Some(&index) => index,
            None => {
                let index = self.graph.add_node(Node::stub(id));
                self.node_indices.insert(id.to_string(), index);
                index
            }
        }
    }

    /// Emit the document: nodes in first-appearance order, links in the order
    /// their directed pair first appeared, weights as aggregated `value`s.
    pub fn finish(self) -> GraphDocument {
        let links = self
            .graph
            .edge_references()
            .map(|edge| {
                let source = &self.graph[edge.source()].id;
                let target = &self.graph[edge.target()].id;
                Link::directed(source, target, *edge.weight())
            })
            .collect();
        let nodes = self.graph.node_weights().cloned().collect();
        GraphDocument {
            nodes,
            links,
            ..GraphDocument::default()
        }
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}
