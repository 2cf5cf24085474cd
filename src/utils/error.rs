use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Configuration validation failed with {} issue(s): {}", .issues.len(), .issues.join("; "))]
    ConfigValidationError { issues: Vec<String> },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template has no mount point for '{mount}'")]
    MissingMountPoint { mount: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("No project at index {index}")]
    UnknownProject { index: usize },

    #[error("Project '{project}' has no additional file at index {index}")]
    UnknownArtifact { project: String, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    Rendering,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigParseError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorCategory::Storage,
            SiteError::SerializationError(_)
            | SiteError::MissingMountPoint { .. }
            | SiteError::RenderError { .. } => ErrorCategory::Rendering,
            SiteError::UnknownProject { .. } | SiteError::UnknownArtifact { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::ConfigParseError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Fix the listed configuration values and run again".to_string()
            }
            SiteError::MissingMountPoint { mount } => {
                format!("Add a {{{{ mount:{} }}}} marker to the page template", mount)
            }
            SiteError::HttpError(_) => "Check network connectivity and the base URL".to_string(),
            SiteError::IoError(_) | SiteError::ZipError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SiteError::UnknownProject { .. } | SiteError::UnknownArtifact { .. } => {
                "Run `folio check` to list the configured projects and files".to_string()
            }
            SiteError::SerializationError(_) | SiteError::RenderError { .. } => {
                "Re-run with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Storage => format!("Could not write output: {}", self),
            ErrorCategory::Rendering => format!("Could not render the page: {}", self),
            ErrorCategory::Input => format!("Invalid selection: {}", self),
        }
    }

    /// 結束碼：依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
