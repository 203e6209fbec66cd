//! Console entry point: reports written to the build log.

use super::builder::ReportBuilder;
use super::dialect::DialectQuirks;
use super::ResultContentBuilder;
use crate::artifacts::ArtifactsInfoProvider;
use crate::format::ConsoleFormatter;
use crate::settings::ReportSettings;
use crate::types::{BaselineInfo, ScanResult};

/// Plain-text report builder for pipeline logs
#[derive(Debug, Clone)]
pub struct ResultConsoleBuilder<P> {
    builder: ReportBuilder<ConsoleFormatter, P>,
}

impl<P: ArtifactsInfoProvider> ResultConsoleBuilder<P> {
    pub fn new(artifacts: P, settings: ReportSettings) -> Self {
        let formatter = ConsoleFormatter::new(settings.branding.clone());
        Self { builder: ReportBuilder::new(formatter, artifacts, settings, DialectQuirks::CONSOLE) }
    }
}

impl<P: ArtifactsInfoProvider> ResultContentBuilder for ResultConsoleBuilder<P> {
    fn build_error_content(&self) -> String {
        self.builder.build_error_content()
    }

    fn build_content(&self, scan: &ScanResult, title: Option<&str>, baseline_info: Option<&BaselineInfo>) -> String {
        self.builder.build_content(scan, title, baseline_info)
    }
}
