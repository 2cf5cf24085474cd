use crate::core::notification::{Notification, NotificationCenter};
use crate::domain::model::ArtifactRef;
use crate::domain::ports::{ArtifactProbe, BrowserAction, BrowserHost, ProbeOutcome};
use crate::utils::file_type::file_type_label;
use std::sync::Arc;

/// One click on a download control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub artifact: ArtifactRef,
    pub display_name: String,
}

impl DownloadRequest {
    pub fn new(artifact: ArtifactRef, display_name: impl Into<String>) -> Self {
        Self {
            artifact,
            display_name: display_name.into(),
        }
    }

    /// Name given to the saved file: the reference's last path segment.
    pub fn filename(&self) -> String {
        let name = self.artifact.file_name();
        if name.is_empty() {
            self.display_name.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    OpenedExternal,
    DownloadStarted { filename: String },
    NotFound { filename: String },
    AccessError,
}

/// Opens external artifacts, or checks that a local one exists and then
/// hands it to the browser's download. Always reports through a notification.
pub struct DownloadDispatcher<P: ArtifactProbe, H: BrowserHost> {
    probe: P,
    host: H,
    notifications: Arc<NotificationCenter>,
}

impl<P: ArtifactProbe, H: BrowserHost> DownloadDispatcher<P, H> {
    pub fn new(probe: P, host: H, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            probe,
            host,
            notifications,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    pub async fn dispatch(&self, request: &DownloadRequest) -> DispatchOutcome {
        let link = &request.artifact.link;
        tracing::info!(
            "⬇️ Download initiated: {} ({}, external: {})",
            request.display_name,
            link,
            request.artifact.is_external()
        );

        if request.artifact.is_external() {
            return self.open_external(request);
        }

        let filename = request.filename();
        match self.probe.probe(link).await {
            ProbeOutcome::Found { content_length } => {
                tracing::debug!("Found {} ({:?} bytes)", link, content_length);
                let action = BrowserAction::Download {
                    href: link.clone(),
                    filename: filename.clone(),
                };
                if let Err(e) = self.host.perform(action) {
                    tracing::error!("❌ Could not start download of {}: {}", link, e);
                    self.notifications.push(Notification::access_error());
                    return DispatchOutcome::AccessError;
                }
                self.notifications.push(Notification::download_started(
                    &request.display_name,
                    &file_type_label(link),
                ));
                DispatchOutcome::DownloadStarted { filename }
            }
            ProbeOutcome::NotFound { status } => {
                tracing::error!("❌ File not found: {} (status: {:?})", link, status);
                self.notifications
                    .push(Notification::file_not_found(&filename));
                DispatchOutcome::NotFound { filename }
            }
            ProbeOutcome::TransportError { message } => {
                tracing::error!("❌ Error accessing file {}: {}", link, message);
                self.notifications.push(Notification::access_error());
                DispatchOutcome::AccessError
            }
        }
    }

    fn open_external(&self, request: &DownloadRequest) -> DispatchOutcome {
        let link = &request.artifact.link;
        if let Err(e) = self.host.perform(BrowserAction::OpenDetached { url: link.clone() }) {
            tracing::warn!("Opening {} failed: {}", link, e);
        }
        self.notifications.push(Notification::external_opened(
            &request.display_name,
            &file_type_label(link),
        ));
        DispatchOutcome::OpenedExternal
    }
}
