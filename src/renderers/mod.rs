//! Flow rendering and output adapters.

pub mod flow;
pub mod html;
pub mod json;
pub mod markup;
pub mod path;

pub use flow::{FlowRenderer, Orientation, RenderInstruction, render};
pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::error::Result;

/// Trait for output adapters that turn render instructions into text.
pub trait Renderer {
    fn render(&self, flow: &[RenderInstruction]) -> Result<String>;
}
