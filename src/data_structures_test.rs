/// Tests for data structures deserialization
///
/// These tests ensure scan results and baseline evaluations are read from
/// the scanner's camelCase JSON, and that the derived counts match.

#[cfg(test)]
mod tests {
    use crate::types::*;

    const SCAN_JSON: &str = r#"{
        "axeVersion": "4.6.3",
        "userAgent": "HeadlessChrome/108.0",
        "results": {
            "urlResults": { "passedUrls": 3, "failedUrls": 2, "unscannableUrls": 1 },
            "resultsByRule": {
                "failed": [
                    {
                        "key": "image-alt",
                        "failed": [
                            {
                                "urls": ["https://a/", "https://b/"],
                                "elementSelector": "img.logo",
                                "snippet": "<img class=\"logo\">",
                                "fix": "Add an alt attribute",
                                "rule": {
                                    "ruleId": "image-alt",
                                    "description": "Images must have alternate text",
                                    "ruleUrl": "https://dequeuniversity.com/rules/axe/4.6/image-alt",
                                    "tags": ["wcag2a", "wcag111"]
                                }
                            }
                        ]
                    },
                    {
                        "key": "label",
                        "failed": [
                            { "urls": ["https://a/"], "rule": { "ruleId": "label", "description": "Form elements must have labels" } },
                            { "urls": ["https://b/"], "rule": { "ruleId": "label", "description": "Form elements must have labels" } }
                        ]
                    }
                ],
                "passed": [ { "ruleId": "region", "description": "Content in landmarks" } ],
                "notApplicable": []
            }
        }
    }"#;

    #[test]
    fn test_scan_result_deserialization() {
        let scan: ScanResult = serde_json::from_str(SCAN_JSON).unwrap();

        assert_eq!(scan.axe_version, "4.6.3");
        assert_eq!(scan.user_agent, "HeadlessChrome/108.0");
        assert_eq!(*scan.url_results(), UrlResults { passed_urls: 3, failed_urls: 2, unscannable_urls: 1 });
        assert_eq!(scan.failed_checks(), 2);
        assert_eq!(scan.passed_checks(), 1);
        assert_eq!(scan.inapplicable_checks(), 0);

        let failure = &scan.failed_groups()[0].failed[0];
        assert_eq!(failure.element_selector.as_deref(), Some("img.logo"));
        assert_eq!(failure.rule.tags, vec!["wcag2a".to_string(), "wcag111".to_string()]);
    }

    #[test]
    fn test_failure_counts() {
        let scan: ScanResult = serde_json::from_str(SCAN_JSON).unwrap();
        let groups = scan.failed_groups();

        // image-alt: one element failing on two pages
        assert_eq!(groups[0].failure_count(), 1);
        assert_eq!(groups[0].instance_count(), 2);
        // label: two elements, one page each
        assert_eq!(groups[1].failure_count(), 2);
        assert_eq!(groups[1].instance_count(), 2);

        assert_eq!(scan.total_failure_instances(), 4);
    }

    #[test]
    fn test_rule_description_lookup() {
        let scan: ScanResult = serde_json::from_str(SCAN_JSON).unwrap();
        assert_eq!(scan.rule_description("label"), Some("Form elements must have labels"));
        assert_eq!(scan.rule_description("region"), None);
    }

    #[test]
    fn test_empty_group_falls_back_to_key() {
        let group = FailuresGroup { key: "duplicate-id".to_string(), failed: vec![] };
        assert_eq!(group.rule_id(), "duplicate-id");
        assert_eq!(group.description(), "");
        assert_eq!(group.instance_count(), 0);
    }

    #[test]
    fn test_missing_rule_lists_default_to_empty() {
        let json = r#"{
            "axeVersion": "4.6.3",
            "userAgent": "ua",
            "results": { "urlResults": { "passedUrls": 1, "failedUrls": 0, "unscannableUrls": 0 }, "resultsByRule": {} }
        }"#;
        let scan: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(scan.failed_checks(), 0);
        assert_eq!(scan.total_failure_instances(), 0);
    }

    #[test]
    fn test_baseline_evaluation_deserialization() {
        let json = r#"{
            "totalNewViolations": 3,
            "totalBaselineViolations": 5,
            "totalFixedViolations": 4,
            "newViolationsByRule": { "label": 2, "image-alt": 1 },
            "fixedViolationsByRule": { "region": 3, "aria-label": 1 },
            "suggestedBaselineUpdate": { "metadata": { "fileFormatVersion": "1" }, "results": [] }
        }"#;
        let evaluation: BaselineEvaluation = serde_json::from_str(json).unwrap();

        assert_eq!(evaluation.total_new_violations, 3);
        assert_eq!(evaluation.total_baseline_violations, Some(5));
        assert!(evaluation.should_update_baseline());
        assert!(evaluation.baseline_has_failures());
        assert_eq!(evaluation.total_fixed_by_rule(), 4);
    }

    #[test]
    fn test_rule_maps_keep_document_order() {
        let json = r#"{
            "totalNewViolations": 6,
            "newViolationsByRule": { "zoom": 1, "alpha": 2, "middle": 3 }
        }"#;
        let evaluation: BaselineEvaluation = serde_json::from_str(json).unwrap();

        let rules: Vec<&str> = evaluation.new_violations_by_rule.keys().map(String::as_str).collect();
        assert_eq!(rules, vec!["zoom", "alpha", "middle"]);
        assert!(!evaluation.has_fixed_violations());
    }

    #[test]
    fn test_null_suggested_update_is_not_an_update() {
        let json = r#"{ "totalNewViolations": 0, "totalBaselineViolations": 0, "suggestedBaselineUpdate": null }"#;
        let evaluation: BaselineEvaluation = serde_json::from_str(json).unwrap();
        assert!(!evaluation.should_update_baseline());
        assert!(!evaluation.baseline_has_failures());

        let absent: BaselineEvaluation = serde_json::from_str(r#"{ "totalNewViolations": 1 }"#).unwrap();
        assert!(!absent.should_update_baseline());
        assert_eq!(absent.total_baseline_violations, None);
    }

    #[test]
    fn test_baseline_info_serialization() {
        let info = BaselineInfo::new(Some("main.baseline".to_string()), None);
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"baselineFileName":"main.baseline"}"#);

        let deserialized: BaselineInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, info);
        assert!(deserialized.evaluation().is_none());
    }
}
