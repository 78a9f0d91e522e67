//! CanvasGraph — converts a Canvas into a petgraph DiGraph for ordering.
//!
//! Nodes keep their input order (petgraph assigns indices in insertion
//! order), edges keep their discovery order, and reciprocal edge pairs are
//! detected once up front.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::syntax::types::{Canvas, Node};

use super::types::BidirectionalPair;

/// Graph intermediate representation of a canvas.
pub struct CanvasGraph {
    pub digraph: DiGraph<Node, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// Bidirectional pairs in edge discovery order.
    pub pairs: Vec<BidirectionalPair>,
    /// Maps pair member → position in `pairs`.
    pair_of: HashMap<NodeIndex, usize>,
}

impl CanvasGraph {
    /// Build a CanvasGraph from the parsed document.
    ///
    /// Edges with a missing endpoint are dropped here, so they count toward
    /// neither adjacency nor in-degree.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let mut digraph: DiGraph<Node, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for node in &canvas.nodes {
            if node_index.contains_key(&node.id) {
                warn!(id = %node.id, "duplicate node id; keeping first definition");
                continue;
            }
            let idx = digraph.add_node(node.clone());
            node_index.insert(node.id.clone(), idx);
        }

        for edge in &canvas.edges {
            match (node_index.get(&edge.from_node), node_index.get(&edge.to_node)) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, ());
                }
                _ => {
                    warn!(
                        from = %edge.from_node,
                        to = %edge.to_node,
                        "edge references a missing node; ignoring it"
                    );
                }
            }
        }

        let (pairs, pair_of) = detect_pairs(&digraph);

        Self {
            digraph,
            node_index,
            pairs,
            pair_of,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.digraph[idx]
    }

    /// Number of edges ending at `idx`, self-loops and parallel edges included.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.digraph
            .edges_directed(idx, petgraph::Direction::Incoming)
            .count()
    }

    /// Forward neighbours of `idx` in edge discovery order.
    ///
    /// Parallel edges yield the same neighbour more than once.
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<_> = self
            .digraph
            .edges(idx)
            .map(|e| (e.id(), e.target()))
            .collect();
        out.sort_by_key(|&(eid, _)| eid);
        out.into_iter().map(|(_, target)| target).collect()
    }

    /// The pair `idx` belongs to, as indices of (first, second) member.
    pub fn pair_members(&self, idx: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        let pair = &self.pairs[*self.pair_of.get(&idx)?];
        Some((self.node_index[&pair.first], self.node_index[&pair.second]))
    }

    /// First node in input order with no incoming edge that is not part of
    /// a bidirectional pair.
    pub fn starting_node(&self) -> Option<NodeIndex> {
        self.digraph
            .node_indices()
            .find(|&idx| !self.pair_of.contains_key(&idx) && self.in_degree(idx) == 0)
    }
}

// ─── Private helpers ──────────────────────────────────────────────────────────

/// Scan edges in discovery order and record each reciprocal pair once.
///
/// A node belongs to at most one pair: a later pair that shares a member
/// with an earlier one is dropped. Self-loops never form a pair.
fn detect_pairs(
    digraph: &DiGraph<Node, ()>,
) -> (Vec<BidirectionalPair>, HashMap<NodeIndex, usize>) {
    let mut pairs: Vec<BidirectionalPair> = Vec::new();
    let mut pair_of: HashMap<NodeIndex, usize> = HashMap::new();
    let mut seen: HashSet<BidirectionalPair> = HashSet::new();

    for edge in digraph.edge_references() {
        let (from, to) = (edge.source(), edge.target());
        if from == to || digraph.find_edge(to, from).is_none() {
            continue;
        }
        let pair = BidirectionalPair::new(digraph[from].id.as_str(), digraph[to].id.as_str());
        if !seen.insert(pair.clone()) {
            continue;
        }
        if pair_of.contains_key(&from) || pair_of.contains_key(&to) {
            warn!(
                first = %pair.first,
                second = %pair.second,
                "node already belongs to a bidirectional pair; ignoring overlapping pair"
            );
            continue;
        }
        debug!(first = %pair.first, second = %pair.second, "bidirectional pair");
        pair_of.insert(from, pairs.len());
        pair_of.insert(to, pairs.len());
        pairs.push(pair);
    }

    (pairs, pair_of)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
