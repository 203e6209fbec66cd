//! Per-dialect differences in report layout.
//!
//! Both dialects share one builder; the few places where the console and
//! Markdown reports differ are captured here as plain data.

/// Output dialect of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Console,
    Markdown,
}

/// How a caller-supplied report title is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// Title text as is
    Bare,
    /// Title wrapped in a heading of the given level
    Heading(usize),
}

/// What precedes the product heading of a baseline-aware report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineLead {
    /// Heading first, immediately followed by the fixed-failures block
    Heading,
    /// A section separator, then the heading and the fixed-failures block
    SeparatorThenHeading,
}

/// Layout differences between the console and Markdown reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectQuirks {
    pub baseline_lead: BaselineLead,
    pub title_style: TitleStyle,
    /// Prefix the "no failures" and "next step" lines with emoji shortcodes
    pub include_icons: bool,
    /// What the user re-runs after fixing an error ("pipeline", "workflow")
    pub rerun_target: &'static str,
}

impl DialectQuirks {
    pub const CONSOLE: DialectQuirks = DialectQuirks {
        baseline_lead: BaselineLead::SeparatorThenHeading,
        title_style: TitleStyle::Bare,
        include_icons: false,
        rerun_target: "pipeline",
    };

    pub const MARKDOWN: DialectQuirks = DialectQuirks {
        baseline_lead: BaselineLead::Heading,
        title_style: TitleStyle::Heading(3),
        include_icons: true,
        rerun_target: "workflow",
    };

    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Console => Self::CONSOLE,
            Dialect::Markdown => Self::MARKDOWN,
        }
    }
}
