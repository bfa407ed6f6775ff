//! Shared HTML building blocks.

/// Escape text for interpolation into HTML content or attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a fixed-height spacing element.
///
/// Inline-styled so the height travels with the markup rather than the
/// stylesheet; hidden from assistive tech since it carries no content.
pub fn spacer(px: u32) -> String {
    format!(
        r#"<div class="spacer" style="height: {}px;" aria-hidden="true"></div>"#,
        px
    )
}
