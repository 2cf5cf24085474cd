use crate::domain::ports::{ArtifactProbe, ProbeOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// HEAD request against the hosting site.
pub struct HttpProbe {
    client: Client,
    base_url: Url,
}

impl HttpProbe {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        crate::utils::validation::validate_url("base_url", base_url)?;
        let mut base_url = Url::parse(base_url).map_err(|e| {
            crate::utils::error::SiteError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: e.to_string(),
            }
        })?;
        // 確保相對路徑接在最後一段之後
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ArtifactProbe for HttpProbe {
    async fn probe(&self, reference: &str) -> ProbeOutcome {
        let url = match self.base_url.join(reference) {
            Ok(url) => url,
            Err(e) => {
                return ProbeOutcome::TransportError {
                    message: format!("cannot resolve '{}': {}", reference, e),
                }
            }
        };

        tracing::debug!("HEAD {}", url);
        match self.client.head(url).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Found {
                content_length: response.content_length(),
            },
            Ok(response) => ProbeOutcome::NotFound {
                status: Some(response.status().as_u16()),
            },
            Err(e) => ProbeOutcome::TransportError {
                message: e.to_string(),
            },
        }
    }
}

/// Existence check against a local site root.
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ArtifactProbe for FsProbe {
    async fn probe(&self, reference: &str) -> ProbeOutcome {
        let path = self.root.join(reference);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => ProbeOutcome::Found {
                content_length: Some(meta.len()),
            },
            Ok(_) => ProbeOutcome::NotFound { status: None },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ProbeOutcome::NotFound { status: None }
            }
            Err(e) => ProbeOutcome::TransportError {
                message: format!("{}: {}", path.display(), e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;
    use tempfile::TempDir;

    #[tokio::test]
    async fn http_probe_maps_statuses() {
        let server = MockServer::start();
        let found = server.mock(|when, then| {
            when.method(HEAD).path("/site/documents/x.pdf");
            then.status(200).header("Content-Length", "2048");
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/site/documents/missing.pdf");
            then.status(404);
        });

        let probe = HttpProbe::new(&server.url("/site"), Duration::from_secs(5)).unwrap();

        assert!(matches!(
            probe.probe("documents/x.pdf").await,
            ProbeOutcome::Found { .. }
        ));
        assert_eq!(
            probe.probe("documents/missing.pdf").await,
            ProbeOutcome::NotFound { status: Some(404) }
        );
        found.assert();
    }

    #[tokio::test]
    async fn http_probe_reports_transport_errors() {
        // nothing listens on port 9 locally
        let probe = HttpProbe::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();
        assert!(matches!(
            probe.probe("documents/x.pdf").await,
            ProbeOutcome::TransportError { .. }
        ));
    }

    #[tokio::test]
    async fn fs_probe_checks_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("documents")).unwrap();
        std::fs::write(dir.path().join("documents/x.pdf"), b"%PDF-1.4").unwrap();

        let probe = FsProbe::new(dir.path());
        assert_eq!(
            probe.probe("documents/x.pdf").await,
            ProbeOutcome::Found {
                content_length: Some(8)
            }
        );
        assert_eq!(
            probe.probe("documents/none.pdf").await,
            ProbeOutcome::NotFound { status: None }
        );
        assert_eq!(
            probe.probe("documents").await,
            ProbeOutcome::NotFound { status: None }
        );
    }
}
