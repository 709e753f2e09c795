use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Demo step '{step}' failed: {details}")]
    StepError { step: String, details: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;

/// 錯誤分類，用於日誌與診斷
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Execution,
}

/// 錯誤嚴重程度，決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::TomlParseError(_) => ErrorCategory::Config,
            DemoError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            DemoError::StepError { .. } => ErrorCategory::Execution,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::IoError(_) => ErrorSeverity::High,
            DemoError::TomlParseError(_) => ErrorSeverity::Critical,
            DemoError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            DemoError::StepError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(_) => {
                "Check that standard output is writable (e.g. the pipe is still open)".to_string()
            }
            DemoError::TomlParseError(_) => {
                "Check the configuration text for TOML syntax errors".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the '{}' value so it satisfies the documented bounds", field)
            }
            DemoError::StepError { step, .. } => {
                format!("Re-run with RUST_LOG=small_algos=debug to trace the '{}' step", step)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write demo output: {}", e),
            DemoError::TomlParseError(e) => format!("Configuration is not valid TOML: {}", e),
            DemoError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!(
                    "Configuration value '{}' = {} is invalid: {}",
                    field, value, reason
                )
            }
            DemoError::StepError { step, details } => {
                format!("The '{}' demonstration failed: {}", step, details)
            }
        }
    }
}
