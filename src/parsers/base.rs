//! Parser trait definition.

use crate::error::Result;
use crate::syntax::types::Canvas;

/// Trait for document parsers.
///
/// Each input encoding implements this trait and yields the same Canvas.
pub trait Parser {
    /// Parse the input source string into a Canvas document.
    fn parse(&self, src: &str) -> Result<Canvas>;
}
