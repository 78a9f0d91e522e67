//! Parser entry point.

pub mod base;
pub mod canvas;

pub use base::Parser;
pub use canvas::CanvasParser;

use crate::error::Result;
use crate::syntax::types::Canvas;

/// Parse a canvas document into its node/edge form.
///
/// Blank input is treated as an empty canvas.
pub fn parse(src: &str) -> Result<Canvas> {
    if src.trim().is_empty() {
        return Ok(Canvas::new());
    }
    CanvasParser.parse(src)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_canvas.rs"]
mod tests;
