//! HTML page renderer.
//!
//! Produces a standalone page laying the flow out top to bottom. Combined
//! blocks are a flex row; right-first blocks reverse the row so the media
//! sits on the right.

use std::fmt::Write;

use super::Renderer;
use super::flow::{Orientation, RenderInstruction};
use super::markup::escape_html;
use crate::error::Result;

const DEFAULT_TITLE: &str = "Canvas Flow";

const STYLE: &str = "\
body { background: #000; margin: 0; }
#canvas-container { display: flex; flex-direction: column; align-items: center; padding: 20px; }
.block { display: flex; flex-direction: column; align-items: center; margin-bottom: 20px; }
.block img { width: 1000px; height: 900px; object-fit: contain; }
.block .text { text-align: center; font-size: 32px; max-width: 1000px; color: white; }
.combined { flex-direction: row; gap: 20px; }
.combined.right-first { flex-direction: row-reverse; }
.combined img { width: 600px; height: 600px; }
.combined .text { max-width: 600px; }
";

/// Renders instructions into an HTML document.
pub struct HtmlRenderer {
    pub title: String,
}

impl HtmlRenderer {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or(DEFAULT_TITLE).to_string(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, flow: &[RenderInstruction]) -> Result<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        // Writing into a String cannot fail.
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(out, "<style>\n{STYLE}</style>");
        out.push_str("</head>\n<body>\n<div id=\"canvas-container\">\n");
        for instruction in flow {
            out.push_str(&block(instruction));
            out.push('\n');
        }
        out.push_str("</div>\n</body>\n</html>\n");
        Ok(out)
    }
}

fn image(path: &str) -> String {
    format!("<img src=\"{}\">", escape_html(path))
}

fn caption(markup: &str) -> String {
    format!("<div class=\"text\">{markup}</div>")
}

fn block(instruction: &RenderInstruction) -> String {
    match instruction {
        RenderInstruction::StandaloneImage { path } => {
            format!("<div class=\"block\">{}</div>", image(path))
        }
        RenderInstruction::StandaloneText { markup } => {
            format!("<div class=\"block\">{}</div>", caption(markup))
        }
        RenderInstruction::CombinedBlock {
            media_path,
            caption: text,
            orientation,
        } => {
            let side = match orientation {
                Orientation::LeftFirst => "left-first",
                Orientation::RightFirst => "right-first",
            };
            format!(
                "<div class=\"block combined {side}\">{}{}</div>",
                image(media_path),
                caption(text)
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_html.rs"]
mod tests;
