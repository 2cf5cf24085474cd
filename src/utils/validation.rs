use crate::utils::error::{Result, SiteError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 收集所有驗證問題，最後一次回報
#[derive(Debug, Default)]
pub struct ValidationReport {
    issues: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, result: Result<()>) {
        if let Err(e) = result {
            self.issues.push(match e {
                SiteError::InvalidConfigValueError { field, value, reason } => {
                    format!("{}: {} (got '{}')", field, reason, value)
                }
                other => other.to_string(),
            });
        }
    }

    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.issues.push(format!("{}: {}", field, reason.into()));
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(SiteError::ConfigValidationError {
                issues: self.issues,
            })
        }
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    // 只允許相對路徑：不可有根目錄、磁碟前綴或 `..`
    let escapes = path.starts_with('/')
        || path.starts_with('\\')
        || std::path::Path::new(path).components().any(|c| {
            !matches!(
                c,
                std::path::Component::Normal(_) | std::path::Component::CurDir
            )
        })
        || path.split(|c| c == '/' || c == '\\').any(|segment| segment == "..");
    if escapes {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must stay inside the site root".to_string(),
        });
    }

    Ok(())
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    let valid = email
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        })
        .unwrap_or(false);

    if !valid || email.chars().any(char::is_whitespace) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: email.to_string(),
            reason: "Not a valid e-mail address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("social.github", "https://github.com/someone").is_ok());
        assert!(validate_url("social.github", "http://example.com").is_ok());
        assert!(validate_url("social.github", "").is_err());
        assert!(validate_url("social.github", "invalid-url").is_err());
        assert!(validate_url("social.github", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("projects[0].link", "documents/report.pdf").is_ok());
        assert!(validate_path("projects[0].link", "").is_err());
        assert!(validate_path("projects[0].link", "../secret.pdf").is_err());
        assert!(validate_path("projects[0].link", "./documents/report.pdf").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_absolute_paths() {
        assert!(validate_path("projects[0].link", "/etc/passwd").is_err());
        assert!(validate_path("projects[0].link", "/tmp/x/secret.pdf").is_err());
        assert!(validate_path("projects[0].link", "documents/../../x.pdf").is_err());
        assert!(validate_path("projects[0].link", "\\\\server\\share\\x.pdf").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("profile.email", "me@example.com").is_ok());
        assert!(validate_email("profile.email", "me@localhost").is_err());
        assert!(validate_email("profile.email", "@example.com").is_err());
        assert!(validate_email("profile.email", "me @example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("skills[0].level", 100u8, 0, 100).is_ok());
        assert!(validate_range("skills[0].level", 101u8, 0, 100).is_err());
    }

    #[test]
    fn test_report_aggregates_issues() {
        let mut report = ValidationReport::new();
        report.check(validate_range("skills[0].level", 120, 0, 100));
        report.check(validate_non_empty_string("profile.name", "  "));
        report.check(validate_non_empty_string("profile.title", "Analyst"));
        report.push("animation.typing_texts", "must not be empty");

        assert_eq!(report.issues().len(), 3);
        assert!(report.issues()[0].starts_with("skills[0].level"));
        match report.into_result() {
            Err(SiteError::ConfigValidationError { issues }) => assert_eq!(issues.len(), 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
