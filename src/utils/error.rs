use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
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
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ApiError(_) => ErrorSeverity::Medium,
            AppError::ProcessingError { .. } | AppError::SerializationError(_) => {
                ErrorSeverity::High
            }
            AppError::IoError(_) => ErrorSeverity::High,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(e) if e.is_timeout() => {
                "The vacancy search API did not answer in time".to_string()
            }
            AppError::ApiError(_) => "Could not reach the vacancy search API".to_string(),
            AppError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "The vacancies file does not exist yet".to_string()
            }
            AppError::IoError(e) => format!("File access failed: {}", e),
            AppError::SerializationError(e) => format!("The vacancies file is not valid JSON: {}", e),
            AppError::ProcessingError { message } => message.clone(),
            AppError::ConfigError { message } => format!("Invalid configuration: {}", message),
            AppError::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ApiError(_) => "Check the network connection and the api.endpoint setting",
            AppError::IoError(_) => "Save some vacancies first or check storage.vacancies_file",
            AppError::SerializationError(_) => "Clear the vacancies file and save the results again",
            AppError::ProcessingError { .. } => "Make sure api.endpoint points at the hh.ru vacancies API",
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
        }
    }
}

/// Process exit code for a failed run.
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        // retryable: network or API trouble
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
