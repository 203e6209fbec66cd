//! Core data structures for scan results and baseline evaluations
//!
//! These mirror the JSON documents produced by the upstream scanner (the
//! "combined report parameters") and by its baseline evaluation step. Field
//! names follow the upstream camelCase spelling on the wire.
use indexmap::IndexMap;

/// Per-rule violation counts, in the order the evaluation listed them
pub type CountsByRule = IndexMap<String, u64>;

/// A complete scan result, as handed over by the scanner
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub axe_version: String,
    pub user_agent: String,
    pub results: ScanResults,
}

impl ScanResult {
    /// Number of rules with at least one passing check
    pub fn passed_checks(&self) -> usize {
        self.results.results_by_rule.passed.len()
    }

    /// Number of rules that did not apply to any scanned page
    pub fn inapplicable_checks(&self) -> usize {
        self.results.results_by_rule.not_applicable.len()
    }

    /// Number of failed rule groups
    pub fn failed_checks(&self) -> usize {
        self.results.results_by_rule.failed.len()
    }

    pub fn url_results(&self) -> &UrlResults {
        &self.results.url_results
    }

    pub fn failed_groups(&self) -> &[FailuresGroup] {
        &self.results.results_by_rule.failed
    }

    /// Total failure instances across every rule, counting one per affected URL
    pub fn total_failure_instances(&self) -> u64 {
        self.failed_groups().iter().map(FailuresGroup::instance_count).sum()
    }

    /// Look up the description of a failed rule by its identifier
    pub fn rule_description(&self, rule_id: &str) -> Option<&str> {
        self.failed_groups()
            .iter()
            .find(|group| group.rule_id() == rule_id)
            .map(|group| group.description())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    pub url_results: UrlResults,
    pub results_by_rule: ResultsByRule,
}

/// Aggregate URL-level outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResults {
    pub passed_urls: u64,
    pub failed_urls: u64,
    pub unscannable_urls: u64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsByRule {
    #[serde(default)]
    pub failed: Vec<FailuresGroup>,
    #[serde(default)]
    pub passed: Vec<RuleData>,
    #[serde(default)]
    pub not_applicable: Vec<RuleData>,
}

/// All failed check instances sharing one rule
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailuresGroup {
    #[serde(default)]
    pub key: String,
    pub failed: Vec<FailureData>,
}

impl FailuresGroup {
    /// Rule identifier, taken from the first failure (falls back to the group key)
    pub fn rule_id(&self) -> &str {
        self.failed.first().map(|f| f.rule.rule_id.as_str()).unwrap_or(&self.key)
    }

    /// Rule description, taken from the first failure
    pub fn description(&self) -> &str {
        self.failed.first().map(|f| f.rule.description.as_str()).unwrap_or("")
    }

    /// Number of failed check instances (element-level) in this group
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Number of (failure, URL) pairs in this group
    pub fn instance_count(&self) -> u64 {
        self.failed.iter().map(|f| f.urls.len() as u64).sum()
    }
}

/// One failed check: a rule violated by one element on one or more pages
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureData {
    #[serde(default)]
    pub urls: Vec<String>,
    pub rule: RuleData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleData {
    pub rule_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Diff between the current scan and a recorded baseline
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineEvaluation {
    #[serde(default)]
    pub total_new_violations: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_baseline_violations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fixed_violations: Option<u64>,
    #[serde(default)]
    pub new_violations_by_rule: CountsByRule,
    #[serde(default)]
    pub fixed_violations_by_rule: CountsByRule,
    /// Replacement baseline content; present when the baseline file is stale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_baseline_update: Option<serde_json::Value>,
}

impl BaselineEvaluation {
    /// Whether the baseline file should be replaced with the suggested update
    pub fn should_update_baseline(&self) -> bool {
        matches!(self.suggested_baseline_update, Some(ref update) if !update.is_null())
    }

    /// Whether the recorded baseline itself contains failures
    pub fn baseline_has_failures(&self) -> bool {
        self.total_baseline_violations.is_some_and(|count| count > 0)
    }

    pub fn has_fixed_violations(&self) -> bool {
        !self.fixed_violations_by_rule.is_empty()
    }

    /// Sum of fixed violations over every rule
    pub fn total_fixed_by_rule(&self) -> u64 {
        self.fixed_violations_by_rule.values().sum()
    }
}

/// Baseline configuration of a run: the file name and its evaluation are independent
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_evaluation: Option<BaselineEvaluation>,
}

impl BaselineInfo {
    pub fn new(baseline_file_name: Option<String>, baseline_evaluation: Option<BaselineEvaluation>) -> Self {
        Self { baseline_file_name, baseline_evaluation }
    }

    pub fn evaluation(&self) -> Option<&BaselineEvaluation> {
        self.baseline_evaluation.as_ref()
    }
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
