//! Document data structures for canvas files.
//!
//! These types represent the parsed form of the input JSON:
//! the node kind enum (NodeKind) and structs (Canvas, Node, Edge).
//! Layout fields present in real canvas files (x, y, width, height,
//! color, edge sides) are accepted and ignored.

use serde::{Deserialize, Serialize};

// ─── NodeKind ────────────────────────────────────────────────────────────────

/// What a node carries. Tagged by the `type` field in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    /// `{"type": "file", "file": "folder/image.png"}`
    File { file: String },
    /// `{"type": "text", "text": "# Heading\nbody"}`
    Text { text: String },
}

impl NodeKind {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::File { .. } => "file",
            NodeKind::Text { .. } => "text",
        }
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Canvas identifier, unique within the document.
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn file(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::File { file: file.into() },
        }
    }

    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Text { text: text.into() },
        }
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// ID of the source node.
    pub from_node: String,
    /// ID of the target node.
    pub to_node: String,
}

impl Edge {
    pub fn new(from_node: impl Into<String>, to_node: impl Into<String>) -> Self {
        Self {
            from_node: from_node.into(),
            to_node: to_node.into(),
        }
    }
}

// ─── Canvas (top-level document) ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
