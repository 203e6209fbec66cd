//! Markdown entry point: job summaries and pull request comments.

use super::builder::ReportBuilder;
use super::dialect::DialectQuirks;
use super::ResultContentBuilder;
use crate::artifacts::ArtifactsInfoProvider;
use crate::format::MarkdownFormatter;
use crate::settings::ReportSettings;
use crate::types::{BaselineInfo, ScanResult};

/// Markdown report builder; titles become level-3 headings
#[derive(Debug, Clone)]
pub struct ResultMarkdownBuilder<P> {
    builder: ReportBuilder<MarkdownFormatter, P>,
}

impl<P: ArtifactsInfoProvider> ResultMarkdownBuilder<P> {
    pub fn new(artifacts: P, settings: ReportSettings) -> Self {
        let formatter = MarkdownFormatter::new(settings.branding.clone());
        Self { builder: ReportBuilder::new(formatter, artifacts, settings, DialectQuirks::MARKDOWN) }
    }
}

impl<P: ArtifactsInfoProvider> ResultContentBuilder for ResultMarkdownBuilder<P> {
    fn build_error_content(&self) -> String {
        self.builder.build_error_content()
    }

    fn build_content(&self, scan: &ScanResult, title: Option<&str>, baseline_info: Option<&BaselineInfo>) -> String {
        self.builder.build_content(scan, title, baseline_info)
    }
}
