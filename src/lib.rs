//! canvas-flow — linearise a node/edge canvas into a top-to-bottom page.
//!
//! Pipeline: parse → CanvasGraph → order → FlowRenderer → output adapter.
//! Public API: `render_canvas()`, plus `order()` and `render()` for callers
//! that already hold a parsed `Canvas`.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{OutputFormat, RenderConfig};
pub use error::{CanvasError, Result};
pub use layout::{OrderedSequence, OrderedUnit, order};
pub use renderers::{Orientation, RenderInstruction, render};
pub use syntax::types::{Canvas, Edge, Node, NodeKind};

use crate::layout::CanvasGraph;
use crate::layout::OrderBuilder;
use crate::parsers::parse;
use crate::renderers::{FlowRenderer, HtmlRenderer, JsonRenderer, Renderer};

/// Parse a canvas document and render it as a linear flow.
pub fn render_canvas(src: &str, config: &RenderConfig) -> Result<String> {
    let canvas = parse(src)?;
    let graph = CanvasGraph::from_canvas(&canvas);
    let sequence = OrderBuilder::new(&graph).build();
    let flow = FlowRenderer::new(config).render(&sequence);
    match config.format {
        OutputFormat::Html => HtmlRenderer::new(config.title.as_deref()).render(&flow),
        OutputFormat::Json => JsonRenderer.render(&flow),
    }
}
