//! Report settings: branding and documentation links
//!
//! These values are injected into formatters and builders at construction
//! time. Every field has a default, so a settings file only needs to name
//! the values it overrides:
//!
//! ```toml
//! [branding]
//! tool_name = "Accessibility Insights for Azure DevOps"
//!
//! [links]
//! baselining_docs = "https://example.com/docs/baseline"
//! ```
use serde::Deserialize;

pub const DEFAULT_BRAND: &str = "Accessibility Insights";
pub const DEFAULT_TOOL_NAME: &str = "Accessibility Insights Action";
pub const DEFAULT_LOGO_URL: &str = "https://accessibilityinsights.io/img/a11yinsights-blue.svg";

pub const DEFAULT_BASELINING_DOCS_URL: &str =
    "https://github.com/microsoft/accessibility-insights-action/blob/main/docs/ado-extension-usage.md#using-a-baseline-file";
pub const DEFAULT_TAB_STOPS_URL: &str =
    "https://accessibilityinsights.io/docs/en/web/getstarted/fastpass/#complete-the-manual-test-for-tab-stops";
pub const DEFAULT_AXE_RELEASE_BASE_URL: &str = "https://github.com/dequelabs/axe-core/releases/tag/v";

/// Product naming used in headings and artifact labels
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Branding {
    /// Family brand, e.g. in "Download the Accessibility Insights artifact"
    pub brand: String,
    /// Product name shown in every report heading
    pub tool_name: String,
    /// Logo shown before the product name in Markdown headings
    pub logo_url: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
        }
    }
}

/// External links embedded in report text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportLinks {
    pub baselining_docs: String,
    pub tab_stops: String,
    /// Prefix of an axe-core release page; the engine version is appended
    pub axe_release_base: String,
}

impl Default for ReportLinks {
    fn default() -> Self {
        Self {
            baselining_docs: DEFAULT_BASELINING_DOCS_URL.to_string(),
            tab_stops: DEFAULT_TAB_STOPS_URL.to_string(),
            axe_release_base: DEFAULT_AXE_RELEASE_BASE_URL.to_string(),
        }
    }
}

impl ReportLinks {
    pub fn axe_release(&self, axe_version: &str) -> String {
        format!("{}{}", self.axe_release_base, axe_version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub branding: Branding,
    pub links: ReportLinks,
}

impl ReportSettings {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse settings: {}", e))
    }
}
