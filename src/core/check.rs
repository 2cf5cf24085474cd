use crate::domain::model::Portfolio;
use crate::domain::ports::{ArtifactProbe, ProbeOutcome};
use serde::Serialize;

/// Probe result for one project artifact. External links are not probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactStatus {
    pub project: String,
    pub name: String,
    pub link: String,
    pub external: bool,
    pub probe: Option<ProbeOutcome>,
}

impl ArtifactStatus {
    pub fn is_missing(&self) -> bool {
        matches!(
            self.probe,
            Some(ProbeOutcome::NotFound { .. }) | Some(ProbeOutcome::TransportError { .. })
        )
    }
}

/// Checks every artifact in project order, primary before additional files.
pub async fn probe_artifacts<P: ArtifactProbe + ?Sized>(
    portfolio: &Portfolio,
    probe: &P,
) -> Vec<ArtifactStatus> {
    let mut statuses = Vec::new();

    for project in &portfolio.projects {
        let entries = std::iter::once((project.title.as_str(), &project.artifact)).chain(
            project
                .additional
                .iter()
                .map(|extra| (extra.name.as_str(), &extra.artifact)),
        );

        for (name, artifact) in entries {
            let probe_result = if artifact.is_external() {
                None
            } else {
                Some(probe.probe(&artifact.link).await)
            };
            statuses.push(ArtifactStatus {
                project: project.title.clone(),
                name: name.to_string(),
                link: artifact.link.clone(),
                external: artifact.is_external(),
                probe: probe_result,
            });
        }
    }

    let missing = statuses.iter().filter(|s| s.is_missing()).count();
    tracing::info!(
        "🔍 Checked {} artifacts, {} missing",
        statuses.len(),
        missing
    );
    statuses
}
