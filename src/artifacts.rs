//! Artifact location provider
//!
//! The CI host uploads the full scan report as a run artifact; the report
//! text links to it when its URL is known.

/// Supplies the URL of the uploaded run artifacts, if any
pub trait ArtifactsInfoProvider {
    fn artifacts_url(&self) -> Option<String>;
}

/// Provider backed by a URL resolved before rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactsInfo {
    url: Option<String>,
}

impl ArtifactsInfo {
    pub fn new(url: Option<String>) -> Self {
        // An empty URL would render as a broken link
        Self { url: url.filter(|u| !u.trim().is_empty()) }
    }

    pub fn none() -> Self {
        Self { url: None }
    }
}

impl ArtifactsInfoProvider for ArtifactsInfo {
    fn artifacts_url(&self) -> Option<String> {
        self.url.clone()
    }
}

impl<P: ArtifactsInfoProvider + ?Sized> ArtifactsInfoProvider for &P {
    fn artifacts_url(&self) -> Option<String> {
        (**self).artifacts_url()
    }
}
