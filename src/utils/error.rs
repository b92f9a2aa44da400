use crate::domain::api_error::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YooKassaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API responded with status {status}: {error}")]
    ApiError { status: u16, error: ApiError },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Decode,
    Config,
    Validation,
}

impl YooKassaError {
    pub fn validation(message: impl Into<String>) -> Self {
        YooKassaError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            YooKassaError::HttpError(_) => ErrorCategory::Network,
            YooKassaError::ApiError { .. } => ErrorCategory::Api,
            YooKassaError::SerializationError(_) => ErrorCategory::Decode,
            YooKassaError::UrlError(_)
            | YooKassaError::IoError(_)
            | YooKassaError::ConfigError { .. }
            | YooKassaError::ConfigValidationError { .. }
            | YooKassaError::InvalidConfigValueError { .. }
            | YooKassaError::MissingConfigError { .. } => ErrorCategory::Config,
            YooKassaError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    /// The remote error payload, if the API rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            YooKassaError::ApiError { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            YooKassaError::ApiError { status, .. } => Some(*status),
            YooKassaError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, YooKassaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_error::ApiErrorCode;

    fn not_found() -> ApiError {
        serde_json::from_value(serde_json::json!({
            "type": "error",
            "id": "ab4c1a4b-2ba4-4a0c-8d28-0a1b1b8b7c3d",
            "code": "not_found",
            "description": "Payment doesn't exist or access denied"
        }))
        .unwrap()
    }

    #[test]
    fn test_api_error_accessors() {
        let err = YooKassaError::ApiError {
            status: 404,
            error: not_found(),
        };

        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.api_error().unwrap().code, ApiErrorCode::NotFound);
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Payment doesn't exist"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            YooKassaError::validation("empty id").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            YooKassaError::MissingConfigError {
                field: "account_id".to_string()
            }
            .category(),
            ErrorCategory::Config
        );

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: YooKassaError = decode.into();
        assert_eq!(err.category(), ErrorCategory::Decode);
        assert!(err.api_error().is_none());
        assert_eq!(err.status(), None);
    }
}
