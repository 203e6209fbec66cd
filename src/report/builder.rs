//! Report content builder - the two entry operations.
//!
//! The builder assembles a report as an ordered list of fragments, each
//! produced by the formatter, and concatenates them. Fragment order is the
//! output contract; the section helpers live in `sections` (plain report)
//! and `baseline` (baseline-aware report).

use super::dialect::{DialectQuirks, TitleStyle};
use crate::artifacts::ArtifactsInfoProvider;
use crate::format::ReportFormatter;
use crate::settings::ReportSettings;
use crate::types::{BaselineInfo, ScanResult};
use log::debug;

/// Builds report text for one dialect.
///
/// Holds only immutable configuration, so one builder can render any number
/// of reports, from any number of threads.
#[derive(Debug, Clone)]
pub struct ReportBuilder<F, P> {
    pub(super) formatter: F,
    pub(super) artifacts: P,
    pub(super) settings: ReportSettings,
    pub(super) quirks: DialectQuirks,
}

impl<F: ReportFormatter, P: ArtifactsInfoProvider> ReportBuilder<F, P> {
    pub fn new(formatter: F, artifacts: P, settings: ReportSettings, quirks: DialectQuirks) -> Self {
        Self { formatter, artifacts, settings, quirks }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn quirks(&self) -> &DialectQuirks {
        &self.quirks
    }

    /// Report shown when the scan itself failed
    pub fn build_error_content(&self) -> String {
        let lines = [
            self.heading_with_message(Some("Something went wrong")),
            self.sep(),
            format!(
                "You can review the log to troubleshoot the issue. Fix it and re-run the {} to run the automated accessibility checks again.",
                self.quirks.rerun_target
            ),
            self.sep(),
        ];

        self.scan_result_details(&lines.concat(), None)
    }

    /// Full report for a scan, optionally titled and compared against a baseline
    pub fn build_content(&self, scan: &ScanResult, title: Option<&str>, baseline_info: Option<&BaselineInfo>) -> String {
        let mut lines = match baseline_info {
            Some(info) => {
                debug!(
                    "Building baseline report (file: {:?}, evaluation: {})",
                    info.baseline_file_name,
                    info.baseline_evaluation.is_some()
                );
                self.baseline_report(scan, info)
            }
            None => {
                debug!("Building report without baseline ({} failed checks)", scan.failed_checks());
                self.base_report(scan)
            }
        };

        if let Some(title) = title {
            let mut titled = vec![self.title_line(title), self.sep()];
            titled.append(&mut lines);
            lines = titled;
        }

        self.scan_result_details(&lines.concat(), Some(&self.scan_result_footer(scan)))
    }

    fn title_line(&self, title: &str) -> String {
        match self.quirks.title_style {
            TitleStyle::Bare => title.to_string(),
            TitleStyle::Heading(level) => self.formatter.heading(title, level),
        }
    }

    /// Section separator as an owned fragment
    pub(super) fn sep(&self) -> String {
        self.formatter.section_separator().to_string()
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
