use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated, read-only portfolio content. Built once from the TOML config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub animation: AnimationTexts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub tryhackme: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub number: u64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Pentesting,
    Defense,
    Tools,
    Programming,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Pentesting,
        SkillCategory::Defense,
        SkillCategory::Tools,
        SkillCategory::Programming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Pentesting => "pentesting",
            SkillCategory::Defense => "defense",
            SkillCategory::Tools => "tools",
            SkillCategory::Programming => "programming",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown skill category '{}'", s))
    }
}

/// Progress-bar percentage. Only constructible for values in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(SkillLevel)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillEntry {
    pub category: SkillCategory,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certification {
    pub name: String,
    pub description: String,
    pub year: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    #[default]
    Document,
    Archive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactTarget {
    /// Relative path resolved against the hosting page.
    Local,
    /// Absolute URL opened in a new browsing context.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRef {
    pub link: String,
    pub target: ArtifactTarget,
}

impl ArtifactRef {
    pub fn local(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            target: ArtifactTarget::Local,
        }
    }

    pub fn external(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            target: ArtifactTarget::External,
        }
    }

    /// 明確旗標優先，沒有旗標時才看 URL 形狀
    pub fn resolve(link: impl Into<String>, external: Option<bool>) -> Self {
        let link = link.into();
        let is_external = external.unwrap_or_else(|| looks_external(&link));
        Self {
            link,
            target: if is_external {
                ArtifactTarget::External
            } else {
                ArtifactTarget::Local
            },
        }
    }

    pub fn is_external(&self) -> bool {
        self.target == ArtifactTarget::External
    }

    pub fn file_name(&self) -> &str {
        crate::utils::file_type::file_name(&self.link)
    }
}

const EXTERNAL_HOST_MARKERS: &[&str] = &["google.com", "drive.google.com"];

/// URL-shape check used when no explicit external flag is configured.
pub fn looks_external(link: &str) -> bool {
    link.starts_with("http://")
        || link.starts_with("https://")
        || EXTERNAL_HOST_MARKERS.iter().any(|host| link.contains(host))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalArtifact {
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub artifact: ArtifactRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub tags: Vec<String>,
    pub artifact: ArtifactRef,
    pub kind: ArtifactKind,
    pub additional: Vec<AdditionalArtifact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub date: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimationTexts {
    pub typing_texts: Vec<String>,
    pub floating_words: Vec<String>,
}
