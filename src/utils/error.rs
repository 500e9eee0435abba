use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

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

    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponseError { endpoint: String, message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HelloError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelloError::ApiError(_) | HelloError::UnexpectedResponseError { .. } => {
                ErrorCategory::Network
            }
            HelloError::ConfigError { .. }
            | HelloError::ConfigValidationError { .. }
            | HelloError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HelloError::SerializationError(_) => ErrorCategory::Data,
            HelloError::IoError(_) | HelloError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常重試即可
            HelloError::ApiError(_) => ErrorSeverity::Medium,
            HelloError::UnexpectedResponseError { .. } => ErrorSeverity::High,
            HelloError::SerializationError(_) => ErrorSeverity::High,
            HelloError::ConfigError { .. }
            | HelloError::ConfigValidationError { .. }
            | HelloError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            HelloError::IoError(_) | HelloError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HelloError::ApiError(e) if e.is_timeout() => {
                "The endpoint did not answer in time; raise client.timeout_seconds or check the server load".to_string()
            }
            HelloError::ApiError(_) => {
                "Make sure the server is running (hello-world serve) and the endpoint URL is reachable".to_string()
            }
            HelloError::UnexpectedResponseError { .. } => {
                "Check that the endpoint points at a hello-world ping route".to_string()
            }
            HelloError::SerializationError(_) => {
                "The payload is not valid JSON; inspect the raw response".to_string()
            }
            HelloError::ConfigError { .. } | HelloError::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            HelloError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration or on the command line", field)
            }
            HelloError::IoError(_) => "Check file permissions and paths".to_string(),
            HelloError::ServerError { .. } => {
                "Check that the address is free and the process may bind to it".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::ApiError(_) => format!("Could not reach the greeting endpoint: {}", self),
            HelloError::UnexpectedResponseError { endpoint, message } => {
                format!("{} answered with an unexpected response: {}", endpoint, message)
            }
            HelloError::ServerError { message } => format!("The server stopped: {}", message),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
