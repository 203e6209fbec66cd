//! Text formatting primitives for the two output dialects.
//!
//! A [`ReportFormatter`] renders one semantic fragment at a time (bold text,
//! headings, links, list items, separators). The report builder never emits
//! markup directly; it always goes through a formatter, so the same report
//! logic yields plain console text or Markdown.
//!
//! # Module Organization
//!
//! - `console` - plain text dialect (markup is dropped, links spelled out)
//! - `markdown` - Markdown dialect with escaping and a branded product title

mod console;
mod markdown;

pub use console::ConsoleFormatter;
pub use markdown::MarkdownFormatter;

/// Rendering primitives for one output dialect.
///
/// Implementations are stateless apart from immutable branding and must be
/// deterministic: the same input always yields the same fragment.
pub trait ReportFormatter {
    /// Neutralize characters the dialect treats as markup
    fn escaped(&self, text: &str) -> String;

    /// Inline code
    fn snippet(&self, text: &str) -> String;

    fn link(&self, href: &str, text: &str) -> String;

    /// One bulleted line, without a trailing separator
    fn list_item(&self, text: &str) -> String {
        format!("* {}", text)
    }

    fn heading(&self, text: &str, level: usize) -> String;

    fn bold(&self, text: &str) -> String;

    /// Product name as shown in report headings
    fn product_title(&self) -> String;

    /// Horizontal rule placed above the report footer
    fn footer_separator(&self) -> &'static str;

    /// Joiner between report fragments
    fn section_separator(&self) -> &'static str {
        "\n"
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
