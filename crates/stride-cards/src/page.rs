//! Full-page document shell around rendered sections.

use chrono::{DateTime, Utc};
use stride_catalog::ShoeListing;

use crate::grid::render_shoe_grid;
use crate::html::escape_html;
use crate::style::CATALOG_STYLES;

/// Head content and framing for a rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    /// Page title.
    pub title: String,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl PageShell {
    /// Create a shell with a title and the standard viewport meta tag.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: vec![(
                "viewport".to_string(),
                "width=device-width, initial-scale=1".to_string(),
            )],
            styles: Vec::new(),
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline CSS block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render a complete HTML document around `body`.
    pub fn render(&self, body: &str) -> String {
        let mut head = String::new();
        head.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        for (name, content) in &self.meta {
            head.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            head.push('\n');
        }
        for css in &self.styles {
            head.push_str(&format!("<style>{}</style>\n", css));
        }

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{head}</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
            head = head,
            body = body
        )
    }
}

/// Render the whole catalog page: shell, stylesheet and listing grid.
pub fn render_catalog_page(title: &str, listings: &[ShoeListing], now: DateTime<Utc>) -> String {
    PageShell::new(title)
        .with_style(CATALOG_STYLES)
        .render(&render_shoe_grid(listings, now))
}
