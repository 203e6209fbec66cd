//! Report generation module - turns scan results into report text.
//!
//! This module handles:
//! - The plain report (summary counts and failed rules)
//! - The baseline-aware report (new, fixed and recorded failures)
//! - The error report shown when a scan could not complete
//! - The shared footer naming the scan engine and browser
//!
//! Markup is produced by the formatters in `crate::format`.
//!
//! # Module Organization
//!
//! - `builder` - `ReportBuilder` and the two entry operations
//! - `sections` - summary lines, failure details, footer
//! - `baseline` - baseline status and the baseline-aware layout
//! - `dialect` - console vs. Markdown layout differences
//! - `console`, `markdown` - dialect entry points

mod baseline;
mod builder;
mod console;
mod dialect;
mod markdown;
mod sections;

#[cfg(test)]
mod test_support;

pub use baseline::BaselineStatus;
pub use builder::ReportBuilder;
pub use console::ResultConsoleBuilder;
pub use dialect::{BaselineLead, Dialect, DialectQuirks, TitleStyle};
pub use markdown::ResultMarkdownBuilder;

use crate::artifacts::ArtifactsInfoProvider;
use crate::settings::ReportSettings;
use crate::types::{BaselineInfo, ScanResult};

/// The two report operations every dialect entry point offers
pub trait ResultContentBuilder {
    /// Fixed report for a scan that did not complete
    fn build_error_content(&self) -> String;

    /// Report for a completed scan
    fn build_content(&self, scan: &ScanResult, title: Option<&str>, baseline_info: Option<&BaselineInfo>) -> String;
}

/// Entry point for a dialect chosen at runtime
pub fn content_builder<P>(dialect: Dialect, artifacts: P, settings: ReportSettings) -> Box<dyn ResultContentBuilder>
where
    P: ArtifactsInfoProvider + 'static,
{
    match dialect {
        Dialect::Console => Box::new(ResultConsoleBuilder::new(artifacts, settings)),
        Dialect::Markdown => Box::new(ResultMarkdownBuilder::new(artifacts, settings)),
    }
}
