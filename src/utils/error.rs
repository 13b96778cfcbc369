use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Invalid professor {field}: {reason}")]
    InvalidRecordField { field: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Dashboard data unavailable: {message}")]
    DashboardUnavailable { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Data,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StorageError { .. } => ErrorCategory::Storage,
            Self::MalformedRecord { .. }
            | Self::InvalidRecordField { .. }
            | Self::SerializationError(_) => ErrorCategory::Data,
            Self::HttpError(_) | Self::DashboardUnavailable { .. } => ErrorCategory::Network,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::StorageError { message } => {
                format!("Could not read professor records: {}", message)
            }
            Self::MalformedRecord { index, reason } => {
                format!("Professor record #{} is invalid: {}", index, reason)
            }
            Self::InvalidRecordField { field, reason } => {
                format!("Professor {} is invalid: {}", field, reason)
            }
            Self::HttpError(e) => format!("Network request failed: {}", e),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(e) => format!("Invalid JSON data: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            Self::MissingConfigError { field } => format!("'{}' must be configured", field),
            Self::DashboardUnavailable { .. } => {
                "Could not load data from the server".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::StorageError { .. } => {
                "Check that the database URI points to a reachable record source"
            }
            Self::MalformedRecord { .. } | Self::InvalidRecordField { .. } => {
                "Give every professor a name, a department, a non-negative salary \
                 and a four-digit hire year"
            }
            Self::HttpError(_) | Self::DashboardUnavailable { .. } => {
                "Check that the server is running and retry"
            }
            Self::IoError(_) => "Check file paths and permissions",
            Self::SerializationError(_) => {
                "Make sure the source returns a JSON array of professors"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
