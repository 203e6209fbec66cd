use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output dialect selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for build logs
    Console,
    /// Markdown for job summaries and pull request comments
    Markdown,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "a11y-scan-report")]
#[command(about = "Render accessibility scan results as console text or Markdown")]
#[command(version)]
pub struct CliArgs {
    /// Scan result JSON written by the scanner (combined report parameters)
    #[arg(long, short = 's', value_name = "PATH")]
    pub scan_result: Option<PathBuf>,

    /// Baseline evaluation JSON comparing this scan with the baseline file
    #[arg(long, value_name = "PATH")]
    pub baseline_evaluation: Option<PathBuf>,

    /// Name of the baseline file configured for this run
    #[arg(long, value_name = "NAME")]
    pub baseline_file: Option<String>,

    /// Render the baseline section even though no baseline is configured
    /// (shows the "Baseline not configured" note)
    #[arg(long, conflicts_with_all = ["baseline_evaluation", "baseline_file"])]
    pub baseline_unconfigured: bool,

    /// Title placed above the report
    #[arg(long, short = 't', value_name = "TEXT")]
    pub title: Option<String>,

    /// Output dialect
    #[arg(long, short = 'f', value_enum, default_value = "console")]
    pub format: OutputFormat,

    /// URL of the uploaded run artifacts (falls back to $A11Y_REPORT_ARTIFACTS_URL)
    #[arg(long, value_name = "URL")]
    pub artifacts_url: Option<String>,

    /// TOML settings file with branding and link overrides (falls back to $A11Y_REPORT_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render the "something went wrong" report instead of a scan report
    #[arg(long)]
    pub error: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // A blank title means no title
        args.title = args.title.filter(|t| !t.trim().is_empty());

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.error {
            if self.scan_result.is_some() {
                return Err("Cannot specify both --error and --scan-result".to_string());
            }
            return Ok(());
        }

        if self.scan_result.is_none() {
            return Err("Must specify --scan-result <PATH> (or --error for the error report)".to_string());
        }

        if self.baseline_unconfigured && (self.baseline_file.is_some() || self.baseline_evaluation.is_some()) {
            return Err(
                "Cannot combine --baseline-unconfigured with --baseline-file or --baseline-evaluation".to_string()
            );
        }

        Ok(())
    }

    /// Whether the report should carry a baseline section
    pub fn wants_baseline(&self) -> bool {
        self.baseline_unconfigured || self.baseline_file.is_some() || self.baseline_evaluation.is_some()
    }
}
