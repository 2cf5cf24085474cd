use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Result of a HEAD-style existence check against a local artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Found { content_length: Option<u64> },
    NotFound { status: Option<u16> },
    TransportError { message: String },
}

#[async_trait]
pub trait ArtifactProbe: Send + Sync {
    async fn probe(&self, reference: &str) -> ProbeOutcome;
}

/// Side effects a page would perform in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// New browsing context with no back-reference to the opener.
    OpenDetached { url: String },
    /// Same-context navigation, e.g. a `mailto:` link.
    Navigate { url: String },
    /// Synthetic anchor with a `download` attribute, clicked then removed.
    Download { href: String, filename: String },
    SmoothScrollTo { target: ScrollTarget },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(String),
}

pub trait BrowserHost: Send + Sync {
    fn perform(&self, action: BrowserAction) -> Result<()>;
}
