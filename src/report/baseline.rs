//! Baseline-aware report layout.
//!
//! When baseline information is supplied the plain report is replaced by
//! this layout: fixed failures, new failures (or a "no failures" note), the
//! baseline status, a link to the run artifacts and a compact scan summary.

use super::builder::ReportBuilder;
use super::dialect::BaselineLead;
use crate::artifacts::ArtifactsInfoProvider;
use crate::format::ReportFormatter;
use crate::types::{BaselineEvaluation, BaselineInfo, ScanResult};
use log::{debug, warn};

/// Which baseline note a report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineStatus {
    /// No baseline file is configured for the run
    NotConfigured,
    /// A baseline file is configured but holds no usable evaluation
    NotDetected,
    /// The baseline records failures, or should be updated
    Recorded { baseline_violations: u64, update_suggested: bool },
    /// The baseline is empty and nothing new failed; no note
    Clean,
}

impl BaselineStatus {
    pub fn classify(info: &BaselineInfo) -> Self {
        if info.baseline_file_name.is_none() {
            return BaselineStatus::NotConfigured;
        }
        let Some(evaluation) = info.evaluation() else {
            return BaselineStatus::NotDetected;
        };

        let update_suggested = evaluation.should_update_baseline();
        match evaluation.total_baseline_violations {
            None => BaselineStatus::NotDetected,
            // An empty baseline with new failures reads as a missing baseline
            Some(0) if evaluation.total_new_violations > 0 => BaselineStatus::NotDetected,
            Some(count) if count > 0 || update_suggested => {
                BaselineStatus::Recorded { baseline_violations: count, update_suggested }
            }
            Some(_) => BaselineStatus::Clean,
        }
    }
}

impl<F: ReportFormatter, P: ArtifactsInfoProvider> ReportBuilder<F, P> {
    pub(super) fn baseline_report(&self, scan: &ScanResult, info: &BaselineInfo) -> Vec<String> {
        let mut lines = Vec::with_capacity(16);
        if self.quirks.baseline_lead == BaselineLead::SeparatorThenHeading {
            lines.push(self.sep());
        }

        lines.extend([
            self.heading_with_message(None),
            self.fixed_failure_details(info),
            self.failure_details_baseline(scan, info),
            self.sep(),
            self.baseline_details(info),
            self.download_artifacts_with_link(scan, info.evaluation()),
            self.formatter.footer_separator().to_string(),
            self.sep(),
            self.formatter.heading("Scan summary", 4),
            self.sep(),
            self.urls_recap(scan.url_results()),
            self.sep(),
            self.rules_recap(scan.passed_checks(), scan.inapplicable_checks(), scan.failed_checks()),
            self.sep(),
        ]);

        lines
    }

    /// Failures recorded in the baseline that no longer occur
    pub(super) fn fixed_failure_details(&self, info: &BaselineInfo) -> String {
        let Some(evaluation) = info.evaluation().filter(|e| e.has_fixed_violations()) else {
            return self.sep();
        };

        let heading = format!("{} failure instances from baseline no longer exist:", evaluation.total_fixed_by_rule());
        let mut lines = vec![self.sep(), self.formatter.bold(&heading), self.sep()];
        for (rule_id, count) in &evaluation.fixed_violations_by_rule {
            lines.push(self.formatter.list_item(&format!("({}) {}", count, self.bold_rule_id(rule_id))));
            lines.push(self.sep());
        }

        lines.concat()
    }

    /// New failures grouped by rule, or the "no failures" block
    pub(super) fn failure_details_baseline(&self, scan: &ScanResult, info: &BaselineInfo) -> String {
        let evaluation = info.evaluation();
        let update_suggested = evaluation.is_some_and(BaselineEvaluation::should_update_baseline);

        let mut lines = vec![self.sep()];
        if self.has_failures(scan, evaluation) || update_suggested {
            let instances = evaluation.map_or_else(|| scan.total_failure_instances(), |e| e.total_new_violations);
            let mut heading = format!("{} failure instances", instances);
            if evaluation.is_some_and(BaselineEvaluation::baseline_has_failures) {
                heading.push_str(" not in baseline");
            }

            lines.push(self.formatter.bold(&heading));
            lines.push(self.sep());
            lines.extend(self.failed_rules_list(scan, evaluation));
        } else {
            lines.extend(self.no_failures_text(evaluation));
        }

        lines.concat()
    }

    fn failed_rules_list(&self, scan: &ScanResult, evaluation: Option<&BaselineEvaluation>) -> Vec<String> {
        let mut lines = Vec::new();
        match evaluation {
            Some(evaluation) => {
                for (rule_id, count) in &evaluation.new_violations_by_rule {
                    let description = scan.rule_description(rule_id).unwrap_or_else(|| {
                        warn!("Rule {} has new violations but no failures in the scan result", rule_id);
                        ""
                    });
                    lines.push(self.failed_rule_list_item_baseline(*count, rule_id, description));
                    lines.push(self.sep());
                }
            }
            None => {
                for group in scan.failed_groups() {
                    lines.push(self.failed_rule_list_item_baseline(
                        group.instance_count(),
                        group.rule_id(),
                        group.description(),
                    ));
                    lines.push(self.sep());
                }
            }
        }

        lines
    }

    fn failed_rule_list_item_baseline(&self, count: u64, rule_id: &str, description: &str) -> String {
        self.formatter.list_item(&format!(
            "({}) {}:  {}",
            count,
            self.bold_rule_id(rule_id),
            self.formatter.escaped(description)
        ))
    }

    fn bold_rule_id(&self, rule_id: &str) -> String {
        self.formatter.bold(&self.formatter.escaped(rule_id))
    }

    fn no_failures_text(&self, evaluation: Option<&BaselineEvaluation>) -> Vec<String> {
        let (check_mark, point_right) =
            if self.quirks.include_icons { (":white_check_mark: ", ":point_right: ") } else { ("", "") };

        let (heading, description) = if evaluation.is_some_and(BaselineEvaluation::baseline_has_failures) {
            (
                "No new failures",
                "No failures were detected by automatic scanning except those which exist in the baseline.",
            )
        } else {
            ("No failures detected", "No failures were detected by automatic scanning.")
        };

        let tab_stops_link = self.formatter.link(&self.settings.links.tab_stops, "Accessibility Insights Tab Stops");

        vec![
            self.formatter.bold(&format!("{}{}", check_mark, heading)),
            self.sep(),
            description.to_string(),
            self.sep(),
            self.sep(),
            self.formatter.bold(&format!("{}Next step:", point_right)),
            format!(" Manually assess keyboard accessibility with {}", tab_stops_link),
            self.sep(),
        ]
    }

    /// Baseline status note; see [`BaselineStatus`]
    pub(super) fn baseline_details(&self, info: &BaselineInfo) -> String {
        let status = BaselineStatus::classify(info);
        debug!("Baseline status: {:?}", status);

        let docs_link = self.formatter.link(&self.settings.links.baselining_docs, "baselining docs");
        match status {
            BaselineStatus::NotConfigured => [
                self.formatter.bold("Baseline not configured"),
                self.sep(),
                format!(
                    "A baseline lets you mark known failures so it's easier to identify new failures as they're introduced. See {} for more.",
                    docs_link
                ),
            ]
            .concat(),
            BaselineStatus::NotDetected => [
                self.formatter.bold("Baseline not detected"),
                self.sep(),
                format!(
                    "To update the baseline with these changes, copy the updated baseline file to {}. See {} for more.",
                    self.scan_arguments_link(),
                    docs_link
                ),
            ]
            .concat(),
            BaselineStatus::Recorded { baseline_violations, update_suggested } => {
                let mut help = format!("not shown; see {}", docs_link);
                if update_suggested {
                    help.push_str(" for how to integrate your changes into the baseline");
                }
                [
                    self.formatter.bold(&format!("{} failure instances in baseline", baseline_violations)),
                    self.sep(),
                    format!("({})", help),
                ]
                .concat()
            }
            BaselineStatus::Clean => String::new(),
        }
    }

    // Without an artifacts URL the label is left unlinked
    fn scan_arguments_link(&self) -> String {
        match self.artifacts.artifacts_url() {
            Some(url) => self.formatter.link(&url, "scan arguments"),
            None => "scan arguments".to_string(),
        }
    }

    /// Pointer to the uploaded report; empty when no artifacts URL is known
    pub(super) fn download_artifacts_with_link(
        &self,
        scan: &ScanResult,
        evaluation: Option<&BaselineEvaluation>,
    ) -> String {
        let Some(url) = self.artifacts.artifacts_url() else {
            return String::new();
        };

        let baseline_has_failures = evaluation.is_some_and(BaselineEvaluation::baseline_has_failures);
        let details = if !baseline_has_failures && !self.has_failures(scan, evaluation) {
            "scan details"
        } else {
            "all failures and scan details"
        };

        [
            self.sep(),
            self.sep(),
            format!("See {} by downloading the report from {}", details, self.formatter.link(&url, "run artifacts")),
            self.sep(),
            self.sep(),
        ]
        .concat()
    }

    /// New failures relative to the baseline, or any failure when there is no evaluation
    fn has_failures(&self, scan: &ScanResult, evaluation: Option<&BaselineEvaluation>) -> bool {
        match evaluation {
            Some(evaluation) => evaluation.total_new_violations > 0,
            None => scan.total_failure_instances() > 0,
        }
    }
}

#[cfg(test)]
#[path = "baseline_test.rs"]
mod baseline_test;
