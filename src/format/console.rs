//! Plain console dialect.

use super::ReportFormatter;
use crate::settings::Branding;

/// Formatter for build logs: no markup, links written as `text (href)`
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleFormatter {
    branding: Branding,
}

impl ConsoleFormatter {
    pub fn new(branding: Branding) -> Self {
        Self { branding }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(Branding::default())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn escaped(&self, text: &str) -> String {
        text.to_string()
    }

    fn snippet(&self, text: &str) -> String {
        text.to_string()
    }

    fn link(&self, href: &str, text: &str) -> String {
        format!("{} ({})", text, href)
    }

    // Console output has no heading levels
    fn heading(&self, text: &str, _level: usize) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn product_title(&self) -> String {
        self.branding.tool_name.clone()
    }

    fn footer_separator(&self) -> &'static str {
        "-------------------"
    }
}
