use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Fixed containers the page markup must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MountPoint {
    PageTitle,
    Logo,
    HeroName,
    AboutHeading,
    AboutTitle,
    AboutParagraphs,
    Stats,
    SkillsGrid,
    CertificationsGrid,
    ProjectsGrid,
    Timeline,
    FloatingWords,
    Contact,
    CurrentYear,
}

impl MountPoint {
    pub const ALL: [MountPoint; 14] = [
        MountPoint::PageTitle,
        MountPoint::Logo,
        MountPoint::HeroName,
        MountPoint::AboutHeading,
        MountPoint::AboutTitle,
        MountPoint::AboutParagraphs,
        MountPoint::Stats,
        MountPoint::SkillsGrid,
        MountPoint::CertificationsGrid,
        MountPoint::ProjectsGrid,
        MountPoint::Timeline,
        MountPoint::FloatingWords,
        MountPoint::Contact,
        MountPoint::CurrentYear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MountPoint::PageTitle => "page_title",
            MountPoint::Logo => "logo",
            MountPoint::HeroName => "hero_name",
            MountPoint::AboutHeading => "about_heading",
            MountPoint::AboutTitle => "about_title",
            MountPoint::AboutParagraphs => "about_paragraphs",
            MountPoint::Stats => "stats",
            MountPoint::SkillsGrid => "skills_grid",
            MountPoint::CertificationsGrid => "certifications_grid",
            MountPoint::ProjectsGrid => "projects_grid",
            MountPoint::Timeline => "timeline",
            MountPoint::FloatingWords => "floating_words",
            MountPoint::Contact => "contact",
            MountPoint::CurrentYear => "current_year",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MountPoint::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered fragments keyed by mount point.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fragments: BTreeMap<MountPoint, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole content of a mount point.
    pub fn mount(&mut self, point: MountPoint, markup: String) {
        self.fragments.insert(point, markup);
    }

    pub fn fragment(&self, point: MountPoint) -> Option<&str> {
        self.fragments.get(&point).map(String::as_str)
    }

    pub fn mounted(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.fragments.keys().copied()
    }

    /// 將片段填入模板中的 `{{ mount:<name> }}` 標記
    ///
    /// Every mounted fragment needs a marker in the template; markers for
    /// unknown or unmounted names are left empty.
    pub fn apply_template(&self, template: &str) -> Result<String> {
        let re = Regex::new(r"\{\{\s*mount:([a-z_]+)\s*\}\}").map_err(|e| {
            SiteError::RenderError {
                message: e.to_string(),
            }
        })?;

        let present: Vec<MountPoint> = re
            .captures_iter(template)
            .filter_map(|caps| MountPoint::from_name(&caps[1]))
            .collect();

        if let Some(missing) = self.mounted().find(|m| !present.contains(m)) {
            return Err(SiteError::MissingMountPoint {
                mount: missing.name().to_string(),
            });
        }

        let filled = re.replace_all(template, |caps: &regex::Captures| {
            match MountPoint::from_name(&caps[1]).and_then(|m| self.fragment(m)) {
                Some(fragment) => fragment.to_string(),
                None => {
                    tracing::warn!("Template marker '{}' has no fragment", &caps[1]);
                    String::new()
                }
            }
        });

        Ok(filled.into_owned())
    }
}

/// Minimal page shell used when no template is supplied.
pub const DEFAULT_SHELL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ mount:page_title }}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="cursor"></div>
    <div class="cursor-follower"></div>
    <canvas id="particles-canvas"></canvas>
    <div class="scroll-progress"></div>
    <nav id="navbar">
        <div class="logo">{{ mount:logo }}</div>
        <button id="menuToggle" aria-label="Menu"></button>
        <ul id="navLinks">
            <li><a class="nav-link" href="#about">About</a></li>
            <li><a class="nav-link" href="#skills">Skills</a></li>
            <li><a class="nav-link" href="#certifications">Certifications</a></li>
            <li><a class="nav-link" href="#projects">Projects</a></li>
            <li><a class="nav-link" href="#experience">Experience</a></li>
            <li><a class="nav-link" href="#contact">Contact</a></li>
        </ul>
    </nav>
    <section class="hero" id="home">
        <div id="floatingWords">{{ mount:floating_words }}</div>
        <h1>{{ mount:hero_name }}</h1>
        <p><span id="typingText"></span></p>
    </section>
    <section id="about">
        <div class="about-text">
            <h3>{{ mount:about_heading }}</h3>
            <p class="about-subtitle">{{ mount:about_title }}</p>
            <div class="about-paragraphs">{{ mount:about_paragraphs }}</div>
        </div>
        <div class="stats">{{ mount:stats }}</div>
    </section>
    <section id="skills">
        <div class="skills-filter">
            <button class="filter-btn active" data-filter="all">All</button>
            <button class="filter-btn" data-filter="pentesting">Pentesting</button>
            <button class="filter-btn" data-filter="defense">Defense</button>
            <button class="filter-btn" data-filter="tools">Tools</button>
            <button class="filter-btn" data-filter="programming">Programming</button>
        </div>
        <div id="skillsGrid">{{ mount:skills_grid }}</div>
    </section>
    <section id="certifications">
        <div id="certificationsGrid">{{ mount:certifications_grid }}</div>
    </section>
    <section id="projects">
        <div id="projectsGrid">{{ mount:projects_grid }}</div>
    </section>
    <section id="experience">
        <div id="timeline">{{ mount:timeline }}</div>
    </section>
    <section id="contact">{{ mount:contact }}</section>
    <footer>&copy; <span id="currentYear">{{ mount:current_year }}</span></footer>
    <button id="backToTop" aria-label="Back to top">↑</button>
    <script src="script.js"></script>
</body>
</html>
"##;
