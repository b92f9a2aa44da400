use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload returned by the API with any status other than 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Request id assigned by YooKassa, useful for support tickets.
    #[serde(default)]
    pub id: String,

    pub code: ApiErrorCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the request parameter that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    /// Suggested delay in milliseconds, sent with `too_many_requests`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidRequest,
    InvalidCredentials,
    Forbidden,
    NotFound,
    TooManyRequests,
    InternalServerError,
    #[serde(other)]
    Unknown,
}

impl ApiErrorCode {
    /// Code as it appears on the wire, e.g. `not_found`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "invalid_request",
            ApiErrorCode::InvalidCredentials => "invalid_credentials",
            ApiErrorCode::Forbidden => "forbidden",
            ApiErrorCode::NotFound => "not_found",
            ApiErrorCode::TooManyRequests => "too_many_requests",
            ApiErrorCode::InternalServerError => "internal_server_error",
            ApiErrorCode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        if let Some(parameter) = &self.parameter {
            write!(f, " (parameter: {})", parameter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_payload() {
        let body = r#"{
            "type": "error",
            "id": "0a8a7a7e-bd4b-4c4e-9a8f-2b0c0e0d3a1f",
            "code": "invalid_request",
            "description": "Idempotence key duplicated",
            "parameter": "Idempotence-Key"
        }"#;

        let error: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(error.kind, "error");
        assert_eq!(error.code, ApiErrorCode::InvalidRequest);
        assert_eq!(error.parameter.as_deref(), Some("Idempotence-Key"));
        assert_eq!(error.retry_after, None);
        assert_eq!(
            error.to_string(),
            "invalid_request: Idempotence key duplicated (parameter: Idempotence-Key)"
        );
    }

    #[test]
    fn test_unknown_code_is_tolerated() {
        let error: ApiError =
            serde_json::from_str(r#"{"type":"error","id":"1","code":"gateway_timeout"}"#).unwrap();
        assert_eq!(error.code, ApiErrorCode::Unknown);
        assert_eq!(error.to_string(), "unknown");
    }

    #[test]
    fn test_retry_after() {
        let error: ApiError = serde_json::from_str(
            r#"{"type":"error","id":"1","code":"too_many_requests","retry_after":1800}"#,
        )
        .unwrap();
        assert_eq!(error.code, ApiErrorCode::TooManyRequests);
        assert_eq!(error.retry_after, Some(1800));
    }

    #[test]
    fn test_code_displays_wire_name() {
        for code in [
            ApiErrorCode::InvalidRequest,
            ApiErrorCode::InvalidCredentials,
            ApiErrorCode::Forbidden,
            ApiErrorCode::NotFound,
            ApiErrorCode::TooManyRequests,
            ApiErrorCode::InternalServerError,
        ] {
            let wire = serde_json::to_value(code).unwrap();
            assert_eq!(wire.as_str(), Some(code.as_str()));
        }

        let error: ApiError = serde_json::from_str(
            r#"{"type":"error","id":"1","code":"not_found","description":"Payment doesn't exist"}"#,
        )
        .unwrap();
        assert_eq!(error.to_string(), "not_found: Payment doesn't exist");
    }
}
