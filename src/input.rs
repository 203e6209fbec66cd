/// Input file loading
///
/// This module handles:
/// - Reading scan result and baseline evaluation JSON documents
/// - Reading the TOML settings file
///
/// Errors are human-readable strings naming the file and the cause.
use a11y_scan_report::{BaselineEvaluation, ReportSettings, ScanResult};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a file's contents as a string
pub fn load_string(path: &Path) -> Result<String, String> {
    let mut file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(s)
}

/// Load a scan result (combined report parameters) from JSON
pub fn load_scan_result(path: &Path) -> Result<ScanResult, String> {
    let json = load_string(path)?;
    let scan: ScanResult = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse scan result {}: {}", path.display(), e))?;

    debug!(
        "Loaded scan result from {:?}: {} failed, {} passed, {} not applicable rules",
        path,
        scan.failed_checks(),
        scan.passed_checks(),
        scan.inapplicable_checks()
    );
    Ok(scan)
}

/// Load a baseline evaluation from JSON
pub fn load_baseline_evaluation(path: &Path) -> Result<BaselineEvaluation, String> {
    let json = load_string(path)?;
    let evaluation: BaselineEvaluation = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse baseline evaluation {}: {}", path.display(), e))?;

    debug!(
        "Loaded baseline evaluation from {:?}: {} new, {:?} in baseline",
        path, evaluation.total_new_violations, evaluation.total_baseline_violations
    );
    Ok(evaluation)
}

/// Load report settings from a TOML file
pub fn load_settings(path: &Path) -> Result<ReportSettings, String> {
    let toml_str = load_string(path)?;
    ReportSettings::from_toml_str(&toml_str).map_err(|e| format!("{} ({})", e, path.display()))
}
