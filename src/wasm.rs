//! WASM bindings for canvas-flow.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen,
//! so a page can fetch its canvas file and hand the JSON text straight in.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, RenderConfig};

/// Render a canvas JSON document to an HTML page with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    Ok(crate::render_canvas(src, &RenderConfig::default())?)
}

/// Render a canvas JSON document with full control over options.
///
/// - `root_folder`: prefix to strip from file paths, or empty string for none
/// - `format`: "html" or "json"
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(src: &str, root_folder: &str, format: &str) -> Result<String, JsError> {
    let format: OutputFormat = format.parse()?;
    let config = RenderConfig {
        root_folder: (!root_folder.is_empty()).then(|| root_folder.to_string()),
        format,
        title: None,
    };
    Ok(crate::render_canvas(src, &config)?)
}
