//! Report sections shared by every report, and the plain (no baseline) layout.

use super::builder::ReportBuilder;
use crate::artifacts::ArtifactsInfoProvider;
use crate::format::ReportFormatter;
use crate::types::{ScanResult, UrlResults};

impl<F: ReportFormatter, P: ArtifactsInfoProvider> ReportBuilder<F, P> {
    /// Report without baseline information
    pub(super) fn base_report(&self, scan: &ScanResult) -> Vec<String> {
        let failed_checks = scan.failed_checks();
        let heading = if failed_checks == 0 {
            self.heading_with_message(Some("All applicable checks passed"))
        } else {
            self.heading_with_message(None)
        };

        vec![
            heading,
            self.sep(),
            self.urls_list_item(scan.url_results()),
            self.sep(),
            self.rules_list_item(scan.passed_checks(), scan.inapplicable_checks(), failed_checks),
            self.sep(),
            self.download_artifacts(),
            self.failure_details(scan),
        ]
    }

    /// Product heading, optionally followed by `: message`
    pub(super) fn heading_with_message(&self, message: Option<&str>) -> String {
        let title = self.formatter.product_title();
        match message {
            Some(message) if !message.is_empty() => self.formatter.heading(&format!("{}: {}", title, message), 3),
            _ => self.formatter.heading(&title, 3),
        }
    }

    pub(super) fn urls_list_item(&self, urls: &UrlResults) -> String {
        let passed_and_unscannable = format!(
            "{} URL(s) passed, and {} were not scannable",
            urls.passed_urls, urls.unscannable_urls
        );
        let summary = if urls.failed_urls == 0 {
            passed_and_unscannable
        } else {
            format!("{} URL(s) failed, {}", urls.failed_urls, passed_and_unscannable)
        };
        self.formatter.list_item(&format!("{}: {}", self.formatter.bold("URLs"), summary))
    }

    pub(super) fn rules_list_item(&self, passed: usize, inapplicable: usize, failed: usize) -> String {
        let passed_and_inapplicable =
            format!("{} check(s) passed, and {} were not applicable", passed, inapplicable);
        let summary = if failed == 0 {
            passed_and_inapplicable
        } else {
            format!("{} check(s) failed, {}", failed, passed_and_inapplicable)
        };
        self.formatter.list_item(&format!("{}: {}", self.formatter.bold("Rules"), summary))
    }

    /// Compact URL counts used in the baseline report's scan summary
    pub(super) fn urls_recap(&self, urls: &UrlResults) -> String {
        format!(
            "{}: {} with failures, {} passed, {} not scannable",
            self.formatter.bold("URLs"),
            urls.failed_urls,
            urls.passed_urls,
            urls.unscannable_urls
        )
    }

    pub(super) fn rules_recap(&self, passed: usize, inapplicable: usize, failed: usize) -> String {
        format!(
            "{}: {} with failures, {} passed, {} not applicable",
            self.formatter.bold("Rules"),
            failed,
            passed,
            inapplicable
        )
    }

    pub(super) fn download_artifacts(&self) -> String {
        let artifact_name = format!("{} artifact", self.settings.branding.brand);
        self.formatter.list_item(&format!(
            "Download the {} to view the detailed results of these checks",
            self.formatter.bold(&artifact_name)
        ))
    }

    /// "Failed instances" list; empty when no rule failed
    pub(super) fn failure_details(&self, scan: &ScanResult) -> String {
        let groups = scan.failed_groups();
        if groups.is_empty() {
            return String::new();
        }

        let mut lines = vec![self.sep(), self.formatter.heading("Failed instances", 4), self.sep()];
        for group in groups {
            lines.push(self.failed_rule_list_item(group.failure_count(), group.rule_id(), group.description()));
            lines.push(self.sep());
        }

        lines.concat()
    }

    fn failed_rule_list_item(&self, failure_count: usize, rule_id: &str, description: &str) -> String {
        let count_and_rule = format!("{} × {}", failure_count, self.formatter.escaped(rule_id));
        self.formatter.list_item(&format!(
            "{}:  {}",
            self.formatter.bold(&count_and_rule),
            self.formatter.escaped(description)
        ))
    }

    /// Append the footer rule and, when given, the footer line
    pub(super) fn scan_result_details(&self, content: &str, footer: Option<&str>) -> String {
        [
            content,
            self.formatter.section_separator(),
            self.formatter.footer_separator(),
            self.formatter.section_separator(),
            footer.unwrap_or(""),
        ]
        .concat()
    }

    /// One-line note naming the scan engine version and the browser
    pub(super) fn scan_result_footer(&self, scan: &ScanResult) -> String {
        let axe_link = self.formatter.link(
            &self.settings.links.axe_release(&scan.axe_version),
            &format!("axe-core {}", scan.axe_version),
        );
        format!("This scan used {} with {}.", axe_link, scan.user_agent)
    }
}
