//! Configuration for the rendering pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::CanvasError;

/// Which output adapter turns render instructions into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(CanvasError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Folder the canvas lives in. File paths starting with `<root_folder>/`
    /// have that prefix stripped. None = paths pass through unchanged.
    pub root_folder: Option<String>,
    pub format: OutputFormat,
    /// Document title for HTML output. None = "Canvas Flow".
    pub title: Option<String>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_folder(mut self, root: impl Into<String>) -> Self {
        self.root_folder = Some(root.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
