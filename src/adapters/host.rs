use crate::domain::ports::{BrowserAction, BrowserHost};
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Keeps every action instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    actions: Mutex<Vec<BrowserAction>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<BrowserAction> {
        self.actions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl BrowserHost for RecordingHost {
    fn perform(&self, action: BrowserAction) -> Result<()> {
        self.actions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(action);
        Ok(())
    }
}

/// Command-line stand-in for the browser: downloads copy files out of the
/// site root, links are printed.
#[derive(Debug, Clone)]
pub struct LocalHost {
    site_root: PathBuf,
    downloads: PathBuf,
}

impl LocalHost {
    pub fn new(site_root: impl Into<PathBuf>, downloads: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
            downloads: downloads.into(),
        }
    }
}

impl BrowserHost for LocalHost {
    fn perform(&self, action: BrowserAction) -> Result<()> {
        match action {
            BrowserAction::Download { href, filename } => {
                validate_path("href", &href)?;
                validate_path("filename", &filename)?;
                fs::create_dir_all(&self.downloads)?;
                let target = self.downloads.join(&filename);
                let bytes = fs::copy(self.site_root.join(&href), &target)?;
                tracing::info!("📁 Saved {} ({} bytes) to {}", filename, bytes, target.display());
            }
            BrowserAction::OpenDetached { url } | BrowserAction::Navigate { url } => {
                tracing::info!("🔗 Open: {}", url);
                println!("🔗 {}", url);
            }
            BrowserAction::SmoothScrollTo { target } => {
                tracing::debug!("Scroll to {:?}", target);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn local_host_copies_download_into_folder() {
        let root = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("documents")).unwrap();
        fs::write(root.path().join("documents/x.pdf"), b"data").unwrap();

        let host = LocalHost::new(root.path(), out.path().join("dl"));
        host.perform(BrowserAction::Download {
            href: "documents/x.pdf".into(),
            filename: "x.pdf".into(),
        })
        .unwrap();

        assert_eq!(fs::read(out.path().join("dl/x.pdf")).unwrap(), b"data");
    }

    #[test]
    fn local_host_refuses_paths_outside_site_root() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let secret = outside.path().join("secret.pdf");
        fs::write(&secret, b"secret").unwrap();
        let out = TempDir::new().unwrap();

        let host = LocalHost::new(root.path(), out.path());
        let result = host.perform(BrowserAction::Download {
            href: secret.to_string_lossy().into_owned(),
            filename: "secret.pdf".into(),
        });

        assert!(result.is_err());
        assert!(!out.path().join("secret.pdf").exists());
    }

    #[test]
    fn recording_host_keeps_order() {
        let host = RecordingHost::new();
        host.perform(BrowserAction::Navigate {
            url: "mailto:a@b.c".into(),
        })
        .unwrap();
        host.perform(BrowserAction::OpenDetached {
            url: "https://example.com".into(),
        })
        .unwrap();
        assert_eq!(host.actions().len(), 2);
        assert!(matches!(host.actions()[0], BrowserAction::Navigate { .. }));
    }
}
