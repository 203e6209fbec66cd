/// Configuration resolution module
///
/// This module handles:
/// - Building a RenderPlan from CLI arguments
/// - Loading the scan result, baseline evaluation and settings files
/// - Applying environment variable fallbacks
/// - Assembling the baseline info handed to the report builder
use crate::cli::{CliArgs, OutputFormat};
use crate::input;
use a11y_scan_report::{ArtifactsInfo, BaselineInfo, Dialect, ReportSettings, ScanResult};
use log::debug;
use std::env;
use std::path::PathBuf;

/// Environment variable supplying the artifacts URL when --artifacts-url is absent
pub const ARTIFACTS_URL_ENV: &str = "A11Y_REPORT_ARTIFACTS_URL";

/// Environment variable supplying the settings file when --config is absent
pub const CONFIG_ENV: &str = "A11Y_REPORT_CONFIG";

/// What to render
#[derive(Debug, Clone, PartialEq)]
pub enum RenderJob {
    /// The fixed "something went wrong" report
    Error,
    /// A report for a completed scan
    Scan { scan: ScanResult, title: Option<String>, baseline: Option<BaselineInfo> },
}

/// Fully resolved rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub dialect: Dialect,
    pub job: RenderJob,
    pub artifacts: ArtifactsInfo,
    pub settings: ReportSettings,
    pub output: Option<PathBuf>,
}

/// Build a complete RenderPlan from CLI arguments
///
/// All files are read here, so rendering itself cannot fail.
pub fn build_render_plan(args: &CliArgs) -> Result<RenderPlan, String> {
    debug!("Building render plan from CLI args");

    let dialect = dialect_for(args.format);

    let config_path = args.config.clone().or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    let settings = match config_path {
        Some(ref path) => {
            debug!("Using settings file {:?}", path);
            input::load_settings(path)?
        }
        None => ReportSettings::default(),
    };

    let artifacts = ArtifactsInfo::new(resolve_artifacts_url(args.artifacts_url.clone(), env::var(ARTIFACTS_URL_ENV).ok()));
    debug!("Artifacts URL: {:?}", artifacts);

    let job = if args.error { RenderJob::Error } else { resolve_scan_job(args)? };

    Ok(RenderPlan { dialect, job, artifacts, settings, output: args.output.clone() })
}

fn resolve_scan_job(args: &CliArgs) -> Result<RenderJob, String> {
    let scan_path = args.scan_result.as_ref().ok_or_else(|| "No scan result specified".to_string())?;
    let scan = input::load_scan_result(scan_path)?;

    let baseline = if args.wants_baseline() {
        let evaluation = match args.baseline_evaluation {
            Some(ref path) => Some(input::load_baseline_evaluation(path)?),
            None => None,
        };
        Some(BaselineInfo::new(args.baseline_file.clone(), evaluation))
    } else {
        None
    };

    debug!("Baseline info: {:?}", baseline.as_ref().map(|b| &b.baseline_file_name));

    Ok(RenderJob::Scan { scan, title: args.title.clone(), baseline })
}

/// Map the CLI output format onto a report dialect
pub fn dialect_for(format: OutputFormat) -> Dialect {
    match format {
        OutputFormat::Console => Dialect::Console,
        OutputFormat::Markdown => Dialect::Markdown,
    }
}

/// The flag wins over the environment; blank values count as absent
pub fn resolve_artifacts_url(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.filter(|u| !u.trim().is_empty()).or_else(|| env_value.filter(|u| !u.trim().is_empty()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
