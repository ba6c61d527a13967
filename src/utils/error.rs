use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockDataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MockDataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MockDataError::IoError(_) => ErrorCategory::Io,
            MockDataError::SerializationError(_) => ErrorCategory::Serialization,
            MockDataError::ConfigError { .. }
            | MockDataError::ConfigValidationError { .. }
            | MockDataError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MockDataError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 磁碟或權限問題，重跑通常無濟於事
            MockDataError::IoError(_) => ErrorSeverity::Critical,
            MockDataError::SerializationError(_) => ErrorSeverity::High,
            MockDataError::ConfigError { .. }
            | MockDataError::ConfigValidationError { .. }
            | MockDataError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MockDataError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Serialization => {
                "Check that the source file is a JSON array of listing objects"
            }
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::Processing => "Run again; if it keeps failing, try a fixed --seed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MockDataError::IoError(e) => format!("Could not read or write a file: {}", e),
            MockDataError::SerializationError(e) => format!("Invalid listing data: {}", e),
            MockDataError::ConfigError { message } => format!("Configuration problem: {}", message),
            MockDataError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MockDataError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            MockDataError::ProcessingError { message } => {
                format!("Generating the dataset failed: {}", message)
            }
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MockDataError>;
