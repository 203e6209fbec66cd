//! Accessibility scan report rendering.
//!
//! Turns a scan result, optionally compared against a failure baseline, into
//! report text for a build log (console dialect) or a job summary / pull
//! request comment (Markdown dialect).
//!
//! ```
//! use a11y_scan_report::{ArtifactsInfo, ReportSettings, ResultContentBuilder, ResultMarkdownBuilder};
//!
//! let builder = ResultMarkdownBuilder::new(ArtifactsInfo::none(), ReportSettings::default());
//! let report = builder.build_error_content();
//! assert!(report.contains("Something went wrong"));
//! ```

pub mod artifacts;
pub mod format;
pub mod report;
pub mod settings;
pub mod types;

pub use artifacts::{ArtifactsInfo, ArtifactsInfoProvider};
pub use format::{ConsoleFormatter, MarkdownFormatter, ReportFormatter};
pub use report::{
    content_builder, BaselineStatus, Dialect, DialectQuirks, ReportBuilder, ResultConsoleBuilder,
    ResultContentBuilder, ResultMarkdownBuilder,
};
pub use settings::{Branding, ReportLinks, ReportSettings};
pub use types::{
    BaselineEvaluation, BaselineInfo, FailureData, FailuresGroup, ResultsByRule, RuleData, ScanResult, ScanResults,
    UrlResults,
};
