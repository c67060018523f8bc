use comrak::{Options, markdown_to_html};

/// Renders a note description from Markdown into display HTML.
///
/// A missing or empty description renders to the empty string, never an
/// error. The conversion is stateless and deterministic: the same input
/// always produces the same output. Nothing beyond comrak's default
/// escaping is applied, and embedded links pass through unchanged,
/// including image links pointing back at the board's own
/// `/uploads/<id>` endpoint.
pub fn render(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => markdown_to_html(text, &Options::default()),
        _ => String::new(),
    }
}
