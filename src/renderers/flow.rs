//! Flow renderer: ordered units to render instructions.
//!
//! Pure mapping. Combined blocks alternate orientation, starting
//! left-first; standalone units leave the alternation untouched.

use serde::Serialize;
use tracing::warn;

use crate::config::RenderConfig;
use crate::layout::types::OrderedUnit;
use crate::syntax::types::{Node, NodeKind};

use super::markup::to_markup;
use super::path::PathNormalizer;

// ─── Orientation ─────────────────────────────────────────────────────────────

/// Which side of a combined block the media sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    LeftFirst,
    RightFirst,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::LeftFirst => Orientation::RightFirst,
            Orientation::RightFirst => Orientation::LeftFirst,
        }
    }
}

// ─── RenderInstruction ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderInstruction {
    StandaloneImage {
        path: String,
    },
    StandaloneText {
        markup: String,
    },
    CombinedBlock {
        media_path: String,
        caption: String,
        orientation: Orientation,
    },
}

// ─── FlowRenderer ────────────────────────────────────────────────────────────

pub struct FlowRenderer {
    paths: PathNormalizer,
}

impl FlowRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            paths: PathNormalizer::new(config.root_folder.as_deref()),
        }
    }

    pub fn render(&self, sequence: &[OrderedUnit]) -> Vec<RenderInstruction> {
        let mut out = Vec::with_capacity(sequence.len());
        let mut orientation = Orientation::LeftFirst;

        for unit in sequence {
            match unit {
                OrderedUnit::Single(node) => out.push(self.standalone(node)),
                OrderedUnit::Combined(a, b) => match (&a.kind, &b.kind) {
                    (NodeKind::File { file }, NodeKind::Text { text })
                    | (NodeKind::Text { text }, NodeKind::File { file }) => {
                        out.push(RenderInstruction::CombinedBlock {
                            media_path: self.paths.normalize(file).to_string(),
                            caption: to_markup(text),
                            orientation,
                        });
                        orientation = orientation.flip();
                    }
                    _ => {
                        warn!(
                            first = %a.id,
                            second = %b.id,
                            kind = a.kind.name(),
                            "pair members share a kind; rendering them separately"
                        );
                        out.push(self.standalone(a));
                        out.push(self.standalone(b));
                    }
                },
            }
        }

        out
    }

    fn standalone(&self, node: &Node) -> RenderInstruction {
        match &node.kind {
            NodeKind::File { file } => RenderInstruction::StandaloneImage {
                path: self.paths.normalize(file).to_string(),
            },
            NodeKind::Text { text } => RenderInstruction::StandaloneText {
                markup: to_markup(text),
            },
        }
    }
}

/// Render an ordered sequence with default settings (no path prefix stripped).
pub fn render(sequence: &[OrderedUnit]) -> Vec<RenderInstruction> {
    FlowRenderer::new(&RenderConfig::default()).render(sequence)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_flow.rs"]
mod tests;
