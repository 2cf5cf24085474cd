use crate::core::page::{Document, DEFAULT_SHELL};
use crate::core::render::Renderer;
use crate::domain::model::Portfolio;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::io::Write;
use std::path::PathBuf;
use zip::write::{FileOptions, ZipWriter};

pub const INDEX_FILE: &str = "index.html";
pub const DATA_FILE: &str = "site-data.json";
pub const ARCHIVE_FILE: &str = "site.zip";

#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub files: Vec<String>,
    pub missing_artifacts: Vec<String>,
    pub archive: Option<String>,
}

/// Renders the page and writes it, with its data and artifacts, to storage.
pub struct SiteBuilder<S: Storage> {
    storage: S,
    renderer: Renderer,
    template: Option<String>,
    site_root: Option<PathBuf>,
    archive: bool,
}

impl<S: Storage> SiteBuilder<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            renderer: Renderer::new(),
            template: None,
            site_root: None,
            archive: false,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = Some(template);
        self
    }

    /// Local artifacts are copied from this directory into the output.
    pub fn with_site_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.site_root = Some(root.into());
        self
    }

    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = archive;
        self
    }

    pub async fn build(&self, portfolio: &Portfolio) -> Result<BuildReport> {
        tracing::info!("🚀 Building portfolio for {}", portfolio.profile.name);
        let mut report = BuildReport::default();
        let mut written: Vec<(String, Vec<u8>)> = Vec::new();

        // 渲染頁面
        let mut doc = Document::new();
        self.renderer.render_into(portfolio, &mut doc);
        let html = doc.apply_template(self.template.as_deref().unwrap_or(DEFAULT_SHELL))?;
        written.push((INDEX_FILE.to_string(), html.into_bytes()));

        // 前端腳本用的資料
        let data = serde_json::to_vec_pretty(portfolio)?;
        written.push((DATA_FILE.to_string(), data));

        if let Some(root) = &self.site_root {
            for link in local_artifacts(portfolio) {
                if let Err(e) = validate_path("artifact", &link) {
                    tracing::warn!("⚠️ Artifact {} not copied: {}", link, e);
                    report.missing_artifacts.push(link);
                    continue;
                }
                match std::fs::read(root.join(&link)) {
                    Ok(bytes) => written.push((link, bytes)),
                    Err(e) => {
                        tracing::warn!("⚠️ Artifact {} not copied: {}", link, e);
                        report.missing_artifacts.push(link);
                    }
                }
            }
        }

        for (path, bytes) in &written {
            tracing::debug!("Writing {} ({} bytes)", path, bytes.len());
            self.storage.write_file(path, bytes).await?;
            report.files.push(path.clone());
        }

        if self.archive {
            let zip_data = bundle(&written)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(ARCHIVE_FILE, &zip_data).await?;
            report.archive = Some(ARCHIVE_FILE.to_string());
        }

        tracing::info!(
            "✅ Site built: {} files, {} missing artifacts",
            report.files.len(),
            report.missing_artifacts.len()
        );
        Ok(report)
    }
}

/// Every local artifact link, primary first, in project order, without duplicates.
pub fn local_artifacts(portfolio: &Portfolio) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for project in &portfolio.projects {
        let refs = std::iter::once(&project.artifact)
            .chain(project.additional.iter().map(|a| &a.artifact));
        for artifact in refs {
            if !artifact.is_external() && !links.contains(&artifact.link) {
                links.push(artifact.link.clone());
            }
        }
    }
    links
}

fn bundle(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (path, bytes) in files {
        zip.start_file::<_, ()>(path.as_str(), FileOptions::default())?;
        zip.write_all(bytes)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
