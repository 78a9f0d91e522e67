//! Caption markup: headings and line breaks, nothing else.
//!
//! `#`..`######` followed by whitespace at the start of a line wraps the
//! rest of the line in `<h1>`..`<h6>`. Lines are joined with `<br>`.
//! Text is HTML-escaped first so captions cannot inject tags.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*$").expect("heading pattern is valid"));

/// Escape `&`, `<`, `>` and `"` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert caption text into presentational markup.
pub fn to_markup(text: &str) -> String {
    text.split('\n')
        .map(|line| convert_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn convert_line(line: &str) -> String {
    let escaped = escape_html(line);
    match HEADING.captures(&escaped) {
        Some(caps) => {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        }
        None => escaped,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_markup.rs"]
mod tests;
