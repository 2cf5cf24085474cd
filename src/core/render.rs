use crate::core::animation::floating_words::{place_words, WordPlacement};
use crate::core::page::{Document, MountPoint};
use crate::domain::model::{
    AdditionalArtifact, ArtifactKind, ArtifactRef, Certification, ExperienceEntry, Portfolio,
    Profile, Project, SkillEntry, Stat,
};
use crate::utils::file_type::{file_extension, file_type_label};
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use url::Url;

/// Turns a [`Portfolio`] into markup fragments, one per mount point.
pub struct Renderer {
    current_year: i32,
    seed: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
            seed: None,
        }
    }

    /// Fixed year and floating-word seed, for reproducible output.
    pub fn deterministic(current_year: i32, seed: u64) -> Self {
        Self {
            current_year,
            seed: Some(seed),
        }
    }

    pub fn render_into(&self, portfolio: &Portfolio, doc: &mut Document) {
        let profile = &portfolio.profile;

        doc.mount(
            MountPoint::PageTitle,
            html_escape(&format!("{} - {} Portfolio", profile.name, profile.title)),
        );
        doc.mount(MountPoint::Logo, html_escape(&profile.name));
        doc.mount(MountPoint::HeroName, html_escape(&profile.name));
        doc.mount(
            MountPoint::AboutHeading,
            html_escape(&format!("Hello! I'm {}", profile.name)),
        );
        doc.mount(MountPoint::AboutTitle, html_escape(&portfolio.about.heading));
        doc.mount(
            MountPoint::AboutParagraphs,
            portfolio
                .about
                .paragraphs
                .iter()
                .map(|p| format!("<p>{}</p>", html_escape(p)))
                .collect(),
        );
        doc.mount(MountPoint::Stats, render_stats(&portfolio.about.stats));
        doc.mount(MountPoint::SkillsGrid, render_skills(&portfolio.skills));
        doc.mount(
            MountPoint::CertificationsGrid,
            render_certifications(&portfolio.certifications),
        );
        doc.mount(MountPoint::ProjectsGrid, render_projects(&portfolio.projects));
        doc.mount(MountPoint::Timeline, render_timeline(&portfolio.experience));

        let placements = match self.seed {
            Some(seed) => place_words(
                &portfolio.animation.floating_words,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => place_words(
                &portfolio.animation.floating_words,
                &mut StdRng::from_entropy(),
            ),
        };
        doc.mount(MountPoint::FloatingWords, render_floating_words(&placements));
        doc.mount(MountPoint::Contact, render_contact(profile));
        doc.mount(MountPoint::CurrentYear, self.current_year.to_string());

        tracing::debug!("Rendered {} mount points", MountPoint::ALL.len());
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_stats(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><span class="stat-number" data-target="{}">0</span><span class="stat-label">{}</span></div>"#,
                stat.number,
                html_escape(&stat.label)
            )
        })
        .collect()
}

pub fn render_skills(skills: &[SkillEntry]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"
<div class="skill-card" data-category="{category}">
    <div class="skill-icon">{icon}</div>
    <h3>{name}</h3>
    <p>{description}</p>
    <div class="skill-level">
        <div class="skill-level-fill" data-level="{level}"></div>
    </div>
</div>"#,
                category = skill.category,
                icon = html_escape(&skill.icon),
                name = html_escape(&skill.name),
                description = html_escape(&skill.description),
                level = skill.level.percent(),
            )
        })
        .collect()
}

pub fn render_certifications(certifications: &[Certification]) -> String {
    certifications
        .iter()
        .map(|cert| {
            format!(
                r#"
<div class="cert-card">
    <div class="cert-icon">{icon}</div>
    <h3>{name}</h3>
    <p class="cert-description">{description}</p>
    <p class="cert-year">Issued: {year}</p>
</div>"#,
                icon = html_escape(&cert.icon),
                name = html_escape(&cert.name),
                description = html_escape(&cert.description),
                year = html_escape(&cert.year),
            )
        })
        .collect()
}

pub fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| render_project(index, project))
        .collect()
}

fn render_project(index: usize, project: &Project) -> String {
    let tags: String = project
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tech-tag">{}</span>"#, html_escape(tag)))
        .collect();

    let external = project.artifact.is_external();
    let caption = PrimaryCaption::for_project(project);

    let note = if external {
        format!(
            r#"<div class="external-note"><small>📢 Hosted on {}</small></div>"#,
            html_escape(&host_label(&project.artifact.link))
        )
    } else {
        String::new()
    };

    let additional = if project.additional.is_empty() {
        String::new()
    } else {
        let buttons: String = project
            .additional
            .iter()
            .enumerate()
            .map(|(d_index, extra)| render_additional_button(index, d_index, extra))
            .collect();
        format!(
            r#"<div class="additional-downloads"><h4>Additional Files:</h4>{}</div>"#,
            buttons
        )
    };

    format!(
        r#"
<div class="project-card" data-project-index="{index}">
    <div class="project-image">{icon}</div>
    <div class="project-content">
        <h3>{title}</h3>
        <p>{description}</p>
        <div class="tech-stack">{tags}</div>
        <div class="download-section">
            <button class="download-btn main-download{external_class}" data-project-index="{index}" data-file-type="main" data-is-external="{external}">
                {button_icon} {label}
                <small>{small}</small>
            </button>
            {note}
            {additional}
        </div>
    </div>
</div>"#,
        index = index,
        icon = html_escape(&project.icon),
        title = html_escape(&project.title),
        description = html_escape(&project.description),
        tags = tags,
        external_class = if external { " external-link" } else { "" },
        external = external,
        button_icon = caption.icon,
        label = html_escape(&caption.label),
        small = html_escape(&caption.small),
        note = note,
        additional = additional,
    )
}

fn render_additional_button(index: usize, d_index: usize, extra: &AdditionalArtifact) -> String {
    let external = extra.artifact.is_external();
    let small = extra
        .description
        .clone()
        .unwrap_or_else(|| file_type_label(&extra.artifact.link));

    format!(
        r#"
<button class="download-btn secondary-download{external_class}" data-project-index="{index}" data-download-index="{d_index}" data-is-external="{external}">
    {icon} {name}
    <small>{small}{arrow}</small>
</button>"#,
        external_class = if external { " external-link" } else { "" },
        index = index,
        d_index = d_index,
        external = external,
        icon = html_escape(&extra.icon),
        name = html_escape(&extra.name),
        small = html_escape(&small),
        arrow = if external { " ↗" } else { "" },
    )
}

/// Icon and text on a project's main button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryCaption {
    pub icon: &'static str,
    pub label: String,
    pub small: String,
}

impl PrimaryCaption {
    pub fn for_project(project: &Project) -> Self {
        let artifact: &ArtifactRef = &project.artifact;
        let icon = match project.kind {
            ArtifactKind::Document => "📄",
            ArtifactKind::Archive => "📦",
        };
        let noun = match file_extension(&artifact.link) {
            Some(ext) => ext.to_uppercase(),
            None => match project.kind {
                ArtifactKind::Document => "Document".to_string(),
                ArtifactKind::Archive => "Archive".to_string(),
            },
        };

        if artifact.is_external() {
            Self {
                icon,
                label: format!("Open {} ({})", noun, host_label(&artifact.link)),
                small: format!("{} ↗", file_type_label(&artifact.link)),
            }
        } else {
            Self {
                icon,
                label: format!("Download {}", noun),
                small: file_type_label(&artifact.link),
            }
        }
    }
}

/// Human name of the host serving an external artifact.
pub fn host_label(link: &str) -> String {
    if link.contains("drive.google.com") {
        return "Google Drive".to_string();
    }
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_else(|| "external site".to_string())
}

pub fn render_timeline(experience: &[ExperienceEntry]) -> String {
    experience
        .iter()
        .map(|exp| {
            format!(
                r#"
<div class="timeline-item">
    <div class="timeline-content">
        <div class="timeline-date">{}</div>
        <h3>{}</h3>
        <p>{}</p>
    </div>
</div>"#,
                html_escape(&exp.date),
                html_escape(&exp.title),
                html_escape(&exp.description)
            )
        })
        .collect()
}

pub fn render_floating_words(placements: &[WordPlacement]) -> String {
    placements
        .iter()
        .map(|p| {
            format!(
                r#"<span class="floating-word" style="left: {:.2}%; top: {:.2}%; animation-delay: {}s">{}</span>"#,
                p.left_percent,
                p.top_percent,
                p.delay.as_secs_f64(),
                html_escape(&p.word)
            )
        })
        .collect()
}

pub fn render_contact(profile: &Profile) -> String {
    let mut items = vec![format!(
        r#"<button class="contact-item" id="emailContact"><span>📧</span><span>{}</span></button>"#,
        html_escape(&profile.email)
    )];

    let socials = [
        ("linkedinContact", "💼", "LinkedIn Profile", &profile.social.linkedin),
        ("githubContact", "🐙", "GitHub Profile", &profile.social.github),
        ("tryhackmeContact", "🎯", "TryHackMe Profile", &profile.social.tryhackme),
        ("twitterContact", "🐦", "Twitter Profile", &profile.social.twitter),
    ];
    for (id, icon, label, url) in socials {
        if url.is_some() {
            items.push(format!(
                r#"<button class="contact-item" id="{}"><span>{}</span><span>{}</span></button>"#,
                id, icon, label
            ));
        }
    }

    if let Some(phone) = &profile.phone {
        items.push(format!(
            r#"<div class="contact-item" id="phoneContact"><span>📞</span><span>{}</span></div>"#,
            html_escape(phone)
        ));
    }

    items.join("\n")
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
