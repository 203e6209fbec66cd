//! Markdown dialect, used for job summaries and pull request comments.

use super::ReportFormatter;
use crate::settings::Branding;

/// Formatter producing GitHub-flavored Markdown
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFormatter {
    branding: Branding,
}

impl MarkdownFormatter {
    pub fn new(branding: Branding) -> Self {
        Self { branding }
    }

    /// Inline image: `![alt](src)`
    pub fn image(alt_text: &str, src: &str) -> String {
        format!("![{}]({})", alt_text, src)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(Branding::default())
    }
}

impl ReportFormatter for MarkdownFormatter {
    /// Escapes `<` so rule ids and descriptions quoting HTML tags stay literal
    fn escaped(&self, text: &str) -> String {
        text.replace('<', "\\<")
    }

    fn snippet(&self, text: &str) -> String {
        format!("`{}`", text)
    }

    fn link(&self, href: &str, text: &str) -> String {
        format!("[{}]({})", text, href)
    }

    fn heading(&self, text: &str, level: usize) -> String {
        format!("{} {}", "#".repeat(level), text)
    }

    fn bold(&self, text: &str) -> String {
        format!("**{}**", text)
    }

    fn product_title(&self) -> String {
        format!("{} {}", Self::image(&self.branding.brand, &self.branding.logo_url), self.branding.tool_name)
    }

    fn footer_separator(&self) -> &'static str {
        "---"
    }
}
