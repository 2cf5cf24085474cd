use crate::core::download::DownloadRequest;
use crate::core::render::{host_label, PrimaryCaption};
use crate::domain::model::Project;
use crate::utils::error::{Result, SiteError};
use std::collections::HashMap;
use std::time::Duration;

/// How long a main external button shows its "opening" state.
pub const LOADING_FEEDBACK: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Main { project: usize },
    Secondary { project: usize, file: usize },
    /// Click on the card outside any button; downloads the main artifact.
    Card { project: usize },
}

/// Resolves download-control clicks into dispatch requests.
pub struct DownloadButtons<'a> {
    projects: &'a [Project],
    loading_until: HashMap<usize, Duration>,
}

impl<'a> DownloadButtons<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            loading_until: HashMap::new(),
        }
    }

    pub fn on_click(&mut self, button: ButtonId, now: Duration) -> Result<DownloadRequest> {
        match button {
            ButtonId::Main { project } => {
                let p = self.project(project)?;
                let request = DownloadRequest::new(p.artifact.clone(), p.title.clone());
                if p.artifact.is_external() {
                    self.loading_until.insert(project, now + LOADING_FEEDBACK);
                }
                Ok(request)
            }
            ButtonId::Secondary { project, file } => {
                let p = self.project(project)?;
                let extra = p
                    .additional
                    .get(file)
                    .ok_or_else(|| SiteError::UnknownArtifact {
                        project: p.title.clone(),
                        index: file,
                    })?;
                Ok(DownloadRequest::new(extra.artifact.clone(), extra.name.clone()))
            }
            ButtonId::Card { project } => {
                let p = self.project(project)?;
                Ok(DownloadRequest::new(p.artifact.clone(), p.title.clone()))
            }
        }
    }

    pub fn is_loading(&self, project: usize, now: Duration) -> bool {
        self.loading_until
            .get(&project)
            .is_some_and(|until| now < *until)
    }

    /// Current main-button label, including the temporary loading text.
    pub fn main_label(&self, project: usize, now: Duration) -> Result<String> {
        let p = self.project(project)?;
        if self.is_loading(project, now) {
            return Ok(format!("⏳ Opening {}...", host_label(&p.artifact.link)));
        }
        let caption = PrimaryCaption::for_project(p);
        Ok(format!("{} {}", caption.icon, caption.label))
    }

    fn project(&self, index: usize) -> Result<&'a Project> {
        self.projects
            .get(index)
            .ok_or(SiteError::UnknownProject { index })
    }
}
