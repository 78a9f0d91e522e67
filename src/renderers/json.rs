//! JSON renderer: the instruction list as a pretty-printed array.

use super::Renderer;
use super::flow::RenderInstruction;
use crate::error::{CanvasError, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, flow: &[RenderInstruction]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(flow).map_err(CanvasError::Serialize)?;
        out.push('\n');
        Ok(out)
    }
}
