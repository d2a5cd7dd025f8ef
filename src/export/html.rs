//! HTML Export Generation
//!
//! This module generates complete HTML documents from markdown content with
//! CriticMarkup spans, with inlined theme CSS for standalone viewing.
//!
//! The render pipeline: expand CriticMarkup spans in the raw markdown, then
//! convert through comrak, then wrap in a document shell whose CSS carries
//! the `--deletion-display` custom property derived from settings.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::markup::{SpanRenderer, CSS_CLASS_PREFIX};
use crate::theme::ThemeColors;
use comrak::{markdown_to_html, Options};
use log::info;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// HTML Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a complete HTML document from markdown content.
///
/// # Arguments
///
/// * `markdown` - The markdown source text (may contain CriticMarkup spans)
/// * `title` - Optional document title
/// * `settings` - Drives the theme palette and the deletion visibility
pub fn generate_html_document(markdown: &str, title: Option<&str>, settings: &Settings) -> String {
    let html_body = markdown_to_html_body(markdown);
    let colors = ThemeColors::for_theme(settings.theme);
    let theme_css = generate_theme_css(&colors);
    let critic_css = generate_critic_css(settings, &colors);

    let doc_title = title.unwrap_or("Exported Document");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="criticmd">
    <title>{title}</title>
    <style>
{base_css}

{theme_css}

{critic_css}
    </style>
</head>
<body>
    <article class="markdown-body">
{body}
    </article>
</body>
</html>"#,
        title = html_escape(doc_title),
        base_css = BASE_CSS,
        theme_css = theme_css,
        critic_css = critic_css,
        body = html_body,
    )
}

/// Generate an HTML fragment (no doctype, head, etc.) for clipboard use.
pub fn generate_html_fragment(markdown: &str) -> String {
    markdown_to_html_body(markdown)
}

/// Convert markdown to HTML body content, expanding CriticMarkup spans first.
fn markdown_to_html_body(markdown: &str) -> String {
    let expanded = SpanRenderer::new().expand(markdown);

    let mut options = Options::default();

    // Enable common extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = Some(String::new());

    // Raw HTML must survive so the expanded <ins>/<del> spans reach the output
    options.render.unsafe_ = true;

    markdown_to_html(&expanded, &options)
}

/// Export a markdown file to an HTML file.
pub fn export_to_html_file(
    source_path: &Path,
    output_path: &Path,
    settings: &Settings,
) -> Result<()> {
    let markdown = std::fs::read_to_string(source_path)?;

    let title = source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Document");

    let html = generate_html_document(&markdown, Some(title), settings);

    std::fs::write(output_path, html).map_err(|e| Error::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!(
        "Exported {} to {}",
        source_path.display(),
        output_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Base CSS for markdown rendering (layout, typography).
const BASE_CSS: &str = r#"
/* Reset and base styles */
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
}

/* Article container */
.markdown-body {
    max-width: 900px;
    margin: 0 auto;
    padding: 32px 24px;
}

/* Headings */
.markdown-body h1,
.markdown-body h2,
.markdown-body h3,
.markdown-body h4,
.markdown-body h5,
.markdown-body h6 {
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}

.markdown-body h1 { font-size: 2em; border-bottom: 1px solid; padding-bottom: 0.3em; }
.markdown-body h2 { font-size: 1.5em; border-bottom: 1px solid; padding-bottom: 0.3em; }
.markdown-body h3 { font-size: 1.25em; }

/* Paragraphs */
.markdown-body p {
    margin-top: 0;
    margin-bottom: 16px;
}

/* Links */
.markdown-body a {
    text-decoration: none;
}

.markdown-body a:hover {
    text-decoration: underline;
}

/* Lists */
.markdown-body ul,
.markdown-body ol {
    margin-top: 0;
    margin-bottom: 16px;
    padding-left: 2em;
}

/* Blockquotes */
.markdown-body blockquote {
    margin: 0 0 16px 0;
    padding: 0 1em;
    border-left: 4px solid;
}

/* Code */
.markdown-body code {
    font-family: 'JetBrains Mono', 'Fira Code', 'Consolas', 'Monaco', monospace;
    font-size: 0.9em;
    padding: 0.2em 0.4em;
    border-radius: 4px;
}

.markdown-body pre {
    margin-top: 0;
    margin-bottom: 16px;
    padding: 16px;
    overflow: auto;
    border-radius: 6px;
    line-height: 1.45;
}

.markdown-body pre code {
    padding: 0;
    background: transparent;
    border-radius: 0;
    font-size: 0.875em;
}

/* Tables */
.markdown-body table {
    border-collapse: collapse;
    width: 100%;
    margin-bottom: 16px;
}

.markdown-body th,
.markdown-body td {
    padding: 8px 12px;
    border: 1px solid;
}

/* Horizontal rule */
.markdown-body hr {
    height: 2px;
    margin: 24px 0;
    border: none;
}

/* Strikethrough */
.markdown-body del {
    text-decoration: line-through;
}
"#;

/// Generate theme-specific CSS from a palette.
fn generate_theme_css(colors: &ThemeColors) -> String {
    format!(
        r#"
/* Theme colors */
:root {{
    color-scheme: {color_scheme};
}}

body {{
    background-color: {bg};
    color: {text};
}}

.markdown-body h1,
.markdown-body h2,
.markdown-body h3,
.markdown-body h4,
.markdown-body h5,
.markdown-body h6 {{
    color: {heading};
}}

.markdown-body h1,
.markdown-body h2 {{
    border-bottom-color: {border};
}}

.markdown-body a {{
    color: {link};
}}

.markdown-body blockquote {{
    color: {blockquote_text};
    border-left-color: {blockquote_border};
}}

.markdown-body code {{
    background-color: {code_bg};
    color: {code_text};
}}

.markdown-body th,
.markdown-body td {{
    border-color: {border};
}}

.markdown-body hr {{
    background-color: {border};
}}
"#,
        color_scheme = if colors.is_dark() { "dark" } else { "light" },
        bg = colors.background.css(),
        text = colors.text.css(),
        heading = colors.heading.css(),
        border = colors.border.css(),
        link = colors.link.css(),
        blockquote_text = colors.blockquote_text.css(),
        blockquote_border = colors.blockquote_border.css(),
        code_bg = colors.code_bg.css(),
        code_text = colors.code_text.css(),
    )
}

/// Generate the CriticMarkup span CSS.
///
/// The `--deletion-display` custom property on the document root gates the
/// visibility of deletion spans; its value comes from the persisted
/// `showDeletion` setting.
fn generate_critic_css(settings: &Settings, colors: &ThemeColors) -> String {
    format!(
        r#"
/* CriticMarkup spans */
:root {{
    --deletion-display: {display};
}}

.{prefix}add {{
    color: {ins_text};
    background-color: {ins_bg};
    text-decoration: none;
}}

.{prefix}delete {{
    display: var(--deletion-display);
    color: {del_text};
    background-color: {del_bg};
    text-decoration: line-through;
}}
"#,
        display = settings.deletion_display(),
        prefix = CSS_CLASS_PREFIX,
        ins_text = colors.insertion_text.css(),
        ins_bg = colors.insertion_bg.css(),
        del_text = colors.deletion_text.css(),
        del_bg = colors.deletion_bg.css(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
