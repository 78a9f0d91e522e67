//! JSON canvas parser.

use tracing::debug;

use crate::error::{CanvasError, Result};
use crate::syntax::types::Canvas;

use super::base::Parser;

/// Parser for `.canvas` JSON documents with top-level `nodes` and `edges`.
pub struct CanvasParser;

impl Parser for CanvasParser {
    fn parse(&self, src: &str) -> Result<Canvas> {
        let canvas: Canvas = serde_json::from_str(src).map_err(CanvasError::Parse)?;
        debug!(
            nodes = canvas.nodes.len(),
            edges = canvas.edges.len(),
            "parsed canvas"
        );
        Ok(canvas)
    }
}
