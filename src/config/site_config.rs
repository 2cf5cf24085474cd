use crate::domain::model::{
    About, AdditionalArtifact, AnimationTexts, ArtifactKind, ArtifactRef, Certification,
    ExperienceEntry, Portfolio, Profile, Project, SkillCategory, SkillEntry, SkillLevel,
    SocialLinks, Stat,
};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate, ValidationReport,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Portfolio 設定檔（TOML）的原始結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub profile: ProfileConfig,
    pub social: Option<SocialConfig>,
    pub about: Option<AboutConfig>,
    #[serde(default)]
    pub skills: Vec<SkillConfig>,
    #[serde(default)]
    pub certifications: Vec<CertificationConfig>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub experience: Vec<ExperienceConfig>,
    pub animation: Option<AnimationConfig>,
    pub http: Option<HttpConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialConfig {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub tryhackme: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutConfig {
    pub title: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatConfig {
    pub number: u64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    pub category: String,
    pub icon: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub level: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationConfig {
    pub name: String,
    pub description: Option<String>,
    pub year: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<Vec<String>>,
    pub link: String,
    pub kind: Option<ArtifactKind>,
    pub external: Option<bool>,
    pub additional: Option<Vec<AdditionalConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalConfig {
    pub name: String,
    pub link: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub external: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceConfig {
    pub date: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub typing_texts: Option<Vec<String>>,
    pub floating_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

const DEFAULT_PROJECT_ICON: &str = "📁";
const DEFAULT_DOWNLOAD_ICON: &str = "📄";

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_EMAIL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證並轉換成不可變的 Portfolio；所有問題一次回報
    pub fn to_portfolio(&self) -> Result<Portfolio> {
        let mut report = ValidationReport::new();

        let profile = self.build_profile(&mut report);
        let about = self.build_about(&mut report);
        let skills = self.build_skills(&mut report);
        let certifications = self.build_certifications(&mut report);
        let projects = self.build_projects(&mut report);
        let experience = self.build_experience(&mut report);
        let animation = self.build_animation(&mut report);

        if let Some(base_url) = self.http.as_ref().and_then(|h| h.base_url.as_deref()) {
            report.check(validate_url("http.base_url", base_url));
        }

        report.into_result()?;

        tracing::debug!(
            "Portfolio loaded: {} skills, {} certifications, {} projects, {} experience entries",
            skills.len(),
            certifications.len(),
            projects.len(),
            experience.len()
        );

        Ok(Portfolio {
            profile,
            about,
            skills,
            certifications,
            projects,
            experience,
            animation,
        })
    }

    fn build_profile(&self, report: &mut ValidationReport) -> Profile {
        report.check(validate_non_empty_string("profile.name", &self.profile.name));
        report.check(validate_non_empty_string("profile.title", &self.profile.title));
        report.check(validate_email("profile.email", &self.profile.email));

        let social = self.social.clone().unwrap_or_default();
        let mut checked = |field: &str, value: Option<String>| -> Option<String> {
            let value = value.filter(|v| !v.trim().is_empty())?;
            report.check(validate_url(field, &value));
            Some(value)
        };

        Profile {
            name: self.profile.name.trim().to_string(),
            title: self.profile.title.trim().to_string(),
            email: self.profile.email.trim().to_string(),
            phone: self.profile.phone.clone().filter(|p| !p.trim().is_empty()),
            social: SocialLinks {
                linkedin: checked("social.linkedin", social.linkedin),
                github: checked("social.github", social.github),
                tryhackme: checked("social.tryhackme", social.tryhackme),
                twitter: checked("social.twitter", social.twitter),
            },
        }
    }

    fn build_about(&self, report: &mut ValidationReport) -> About {
        let Some(about) = &self.about else {
            return About::default();
        };

        for (i, stat) in about.stats.iter().enumerate() {
            report.check(validate_non_empty_string(
                &format!("about.stats[{}].label", i),
                &stat.label,
            ));
        }

        About {
            heading: about.title.clone().unwrap_or_default(),
            paragraphs: about
                .paragraphs
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            stats: about
                .stats
                .iter()
                .map(|s| Stat {
                    number: s.number,
                    label: s.label.clone(),
                })
                .collect(),
        }
    }

    fn build_skills(&self, report: &mut ValidationReport) -> Vec<SkillEntry> {
        let mut skills = Vec::with_capacity(self.skills.len());

        for (i, skill) in self.skills.iter().enumerate() {
            let prefix = format!("skills[{}]", i);
            report.check(validate_non_empty_string(&format!("{}.name", prefix), &skill.name));
            report.check(validate_range(&format!("{}.level", prefix), skill.level, 0, 100));

            let category = match skill.category.parse::<SkillCategory>() {
                Ok(c) => Some(c),
                Err(reason) => {
                    report.push(&format!("{}.category", prefix), reason);
                    None
                }
            };

            if let (Some(category), Some(level)) = (category, SkillLevel::new(skill.level)) {
                skills.push(SkillEntry {
                    category,
                    icon: skill.icon.clone().unwrap_or_default(),
                    name: skill.name.clone(),
                    description: skill.description.clone().unwrap_or_default(),
                    level,
                });
            }
        }

        skills
    }

    fn build_certifications(&self, report: &mut ValidationReport) -> Vec<Certification> {
        self.certifications
            .iter()
            .enumerate()
            .map(|(i, cert)| {
                report.check(validate_non_empty_string(
                    &format!("certifications[{}].name", i),
                    &cert.name,
                ));
                Certification {
                    name: cert.name.clone(),
                    description: cert.description.clone().unwrap_or_default(),
                    year: cert.year.clone(),
                    icon: cert.icon.clone().unwrap_or_default(),
                }
            })
            .collect()
    }

    fn build_projects(&self, report: &mut ValidationReport) -> Vec<Project> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let prefix = format!("projects[{}]", i);
                report.check(validate_non_empty_string(
                    &format!("{}.title", prefix),
                    &project.title,
                ));

                let artifact = ArtifactRef::resolve(project.link.trim(), project.external);
                check_artifact(report, &format!("{}.link", prefix), &artifact);

                let additional = project
                    .additional
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .map(|(j, extra)| {
                        let extra_prefix = format!("{}.additional[{}]", prefix, j);
                        report.check(validate_non_empty_string(
                            &format!("{}.name", extra_prefix),
                            &extra.name,
                        ));
                        let artifact = ArtifactRef::resolve(extra.link.trim(), extra.external);
                        check_artifact(report, &format!("{}.link", extra_prefix), &artifact);

                        AdditionalArtifact {
                            name: extra.name.clone(),
                            icon: extra
                                .icon
                                .clone()
                                .unwrap_or_else(|| DEFAULT_DOWNLOAD_ICON.to_string()),
                            description: extra.description.clone().filter(|d| !d.trim().is_empty()),
                            artifact,
                        }
                    })
                    .collect();

                Project {
                    title: project.title.clone(),
                    description: project.description.clone().unwrap_or_default(),
                    icon: project
                        .icon
                        .clone()
                        .unwrap_or_else(|| DEFAULT_PROJECT_ICON.to_string()),
                    tags: project.tags.clone().unwrap_or_default(),
                    artifact,
                    kind: project.kind.unwrap_or_default(),
                    additional,
                }
            })
            .collect()
    }

    fn build_experience(&self, report: &mut ValidationReport) -> Vec<ExperienceEntry> {
        self.experience
            .iter()
            .enumerate()
            .map(|(i, exp)| {
                report.check(validate_non_empty_string(
                    &format!("experience[{}].title", i),
                    &exp.title,
                ));
                ExperienceEntry {
                    date: exp.date.clone(),
                    title: exp.title.clone(),
                    description: exp.description.clone().unwrap_or_default(),
                }
            })
            .collect()
    }

    fn build_animation(&self, report: &mut ValidationReport) -> AnimationTexts {
        let animation = self.animation.clone().unwrap_or_default();
        let typing_texts = animation.typing_texts.unwrap_or_default();

        for (i, text) in typing_texts.iter().enumerate() {
            report.check(validate_non_empty_string(
                &format!("animation.typing_texts[{}]", i),
                text,
            ));
        }

        AnimationTexts {
            typing_texts,
            floating_words: animation
                .floating_words
                .unwrap_or_default()
                .into_iter()
                .filter(|w| !w.trim().is_empty())
                .collect(),
        }
    }

    /// 探測用 HTTP 基底 URL
    pub fn base_url(&self) -> Option<&str> {
        self.http.as_ref().and_then(|h| h.base_url.as_deref())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(
            self.http
                .as_ref()
                .and_then(|h| h.timeout_seconds)
                .unwrap_or(10),
        )
    }
}

fn check_artifact(report: &mut ValidationReport, field: &str, artifact: &ArtifactRef) {
    if artifact.is_external() {
        if artifact.link.contains("://") {
            report.check(validate_url(field, &artifact.link));
        } else {
            report.check(validate_non_empty_string(field, &artifact.link));
        }
    } else {
        report.check(validate_path(field, &artifact.link));
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.to_portfolio().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ArtifactTarget;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[profile]
name = "Jane Doe"
title = "Security Engineer"
email = "jane@example.com"

[social]
github = "https://github.com/janedoe"

[about]
title = "About me"
paragraphs = ["First.", "Second."]
stats = [{ number = 3, label = "Certifications" }]

[[skills]]
category = "pentesting"
icon = "🔍"
name = "Vulnerability Assessment"
description = "Finding holes"
level = 90

[[projects]]
title = "Unitrack"
description = "Attendance tracking"
tags = ["Python", "Flask"]
link = "documents/Unitrack.pdf"

[[projects]]
title = "Big Report"
link = "https://drive.google.com/file/d/abc/view"
kind = "archive"

[[projects.additional]]
name = "Source"
link = "documents/source.zip"
description = "Full source tree"

[animation]
typing_texts = ["Analyst", "Tester"]
floating_words = ["Security", "Cyber"]
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = SiteConfig::from_toml_str(BASIC).unwrap();
        let portfolio = config.to_portfolio().unwrap();

        assert_eq!(portfolio.profile.name, "Jane Doe");
        assert_eq!(
            portfolio.profile.social.github.as_deref(),
            Some("https://github.com/janedoe")
        );
        assert!(portfolio.profile.social.tryhackme.is_none());
        assert_eq!(portfolio.skills[0].level.percent(), 90);
        assert_eq!(portfolio.projects[0].artifact.target, ArtifactTarget::Local);
        assert!(portfolio.projects[0].additional.is_empty());
        assert_eq!(portfolio.projects[1].artifact.target, ArtifactTarget::External);
        assert_eq!(portfolio.projects[1].kind, ArtifactKind::Archive);
        assert_eq!(portfolio.projects[1].additional.len(), 1);
        assert_eq!(portfolio.animation.typing_texts, vec!["Analyst", "Tester"]);
    }

    #[test]
    fn test_validation_aggregates_all_issues() {
        let toml_content = r#"
[profile]
name = ""
title = "Engineer"
email = "not-an-email"

[[skills]]
category = "cooking"
name = "Soup"
level = 140

[[projects]]
title = "Escape"
link = "../../etc/passwd"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(SiteError::ConfigValidationError { issues }) => {
                assert_eq!(issues.len(), 5, "issues: {:?}", issues);
                assert!(issues.iter().any(|i| i.starts_with("profile.name")));
                assert!(issues.iter().any(|i| i.starts_with("profile.email")));
                assert!(issues.iter().any(|i| i.starts_with("skills[0].level")));
                assert!(issues.iter().any(|i| i.starts_with("skills[0].category")));
                assert!(issues.iter().any(|i| i.starts_with("projects[0].link")));
            }
            other => panic!("expected aggregated validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOLIO_TEST_EMAIL", "env@example.com");

        let toml_content = r#"
[profile]
name = "Env"
title = "Tester"
email = "${FOLIO_TEST_EMAIL}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.profile.email, "env@example.com");

        std::env::remove_var("FOLIO_TEST_EMAIL");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("[profile\nname = 1").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.profile.title, "Security Engineer");
        assert_eq!(config.probe_timeout(), Duration::from_secs(10));
    }
}
