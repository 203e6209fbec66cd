//! Scan result fixtures shared by the report tests.

use crate::artifacts::ArtifactsInfo;
use crate::report::{ResultConsoleBuilder, ResultMarkdownBuilder};
use crate::settings::ReportSettings;
use crate::types::*;

pub const AXE_VERSION: &str = "4.6.3";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) HeadlessChrome/108.0.5359.71";
pub const ARTIFACTS_URL: &str = "https://ci.example/run/1/artifacts";

pub fn rule(rule_id: &str, description: &str) -> RuleData {
    RuleData { rule_id: rule_id.to_string(), description: description.to_string(), rule_url: None, tags: vec![] }
}

pub fn failure(rule_id: &str, description: &str, urls: &[&str]) -> FailureData {
    FailureData {
        urls: urls.iter().map(|u| u.to_string()).collect(),
        rule: rule(rule_id, description),
        element_selector: None,
        snippet: None,
        fix: None,
    }
}

pub fn group(failed: Vec<FailureData>) -> FailuresGroup {
    let key = failed.first().map(|f| f.rule.rule_id.clone()).unwrap_or_default();
    FailuresGroup { key, failed }
}

pub fn scan(urls: UrlResults, passed: usize, not_applicable: usize, failed: Vec<FailuresGroup>) -> ScanResult {
    ScanResult {
        axe_version: AXE_VERSION.to_string(),
        user_agent: USER_AGENT.to_string(),
        results: ScanResults {
            url_results: urls,
            results_by_rule: ResultsByRule {
                failed,
                passed: (0..passed).map(|i| rule(&format!("passed-{}", i), "passes")).collect(),
                not_applicable: (0..not_applicable).map(|i| rule(&format!("na-{}", i), "not applicable")).collect(),
            },
        },
    }
}

/// 3 passed URLs, 1 failed URL, 2 passed checks, one failed `color-contrast`
/// rule with two failing elements on the same page
pub fn scan_with_failures() -> ScanResult {
    scan(
        UrlResults { passed_urls: 3, failed_urls: 1, unscannable_urls: 0 },
        2,
        0,
        vec![group(vec![
            failure("color-contrast", "Elements must meet contrast ratio", &["https://example.com/"]),
            failure("color-contrast", "Elements must meet contrast ratio", &["https://example.com/"]),
        ])],
    )
}

pub fn scan_all_passed() -> ScanResult {
    scan(UrlResults { passed_urls: 4, failed_urls: 0, unscannable_urls: 1 }, 20, 35, vec![])
}

pub fn evaluation(
    total_new: u64,
    total_baseline: Option<u64>,
    new_by_rule: &[(&str, u64)],
    fixed_by_rule: &[(&str, u64)],
) -> BaselineEvaluation {
    BaselineEvaluation {
        total_new_violations: total_new,
        total_baseline_violations: total_baseline,
        total_fixed_violations: Some(fixed_by_rule.iter().map(|(_, n)| n).sum()),
        new_violations_by_rule: new_by_rule.iter().map(|(r, n)| (r.to_string(), *n)).collect(),
        fixed_violations_by_rule: fixed_by_rule.iter().map(|(r, n)| (r.to_string(), *n)).collect(),
        suggested_baseline_update: None,
    }
}

pub fn with_update_suggested(mut evaluation: BaselineEvaluation) -> BaselineEvaluation {
    evaluation.suggested_baseline_update = Some(serde_json::json!({ "metadata": { "fileFormatVersion": "1" } }));
    evaluation
}

pub fn baseline(file_name: Option<&str>, evaluation: Option<BaselineEvaluation>) -> BaselineInfo {
    BaselineInfo::new(file_name.map(str::to_string), evaluation)
}

pub fn markdown_builder(artifacts_url: Option<&str>) -> ResultMarkdownBuilder<ArtifactsInfo> {
    ResultMarkdownBuilder::new(ArtifactsInfo::new(artifacts_url.map(str::to_string)), ReportSettings::default())
}

pub fn console_builder(artifacts_url: Option<&str>) -> ResultConsoleBuilder<ArtifactsInfo> {
    ResultConsoleBuilder::new(ArtifactsInfo::new(artifacts_url.map(str::to_string)), ReportSettings::default())
}
