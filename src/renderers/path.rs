//! File path normalisation for image sources.

/// Strips a configured root-folder prefix from canvas file paths.
///
/// Canvas files store paths relative to the vault, e.g. `Song/img.png`;
/// the page is served from inside `Song/`, so the prefix is dropped.
#[derive(Debug, Clone, Default)]
pub struct PathNormalizer {
    /// `<root>/`, or None when nothing should be stripped.
    prefix: Option<String>,
}

impl PathNormalizer {
    pub fn new(root_folder: Option<&str>) -> Self {
        let prefix = root_folder
            .map(|root| root.trim_end_matches('/'))
            .filter(|root| !root.is_empty())
            .map(|root| format!("{root}/"));
        Self { prefix }
    }

    pub fn normalize<'a>(&self, path: &'a str) -> &'a str {
        match &self.prefix {
            Some(prefix) => path.strip_prefix(prefix.as_str()).unwrap_or(path),
            None => path,
        }
    }
}
