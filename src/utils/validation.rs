use crate::utils::error::{Result, YooKassaError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(YooKassaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(YooKassaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(YooKassaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| YooKassaError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(YooKassaError::InvalidConfigValueError {
            field: field_name.to_string(),
            // never echo the value back, it may be a secret
            value: String::new(),
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
        return Err(YooKassaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Request-side counterpart of [`validate_non_empty_string`].
pub fn validate_present(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(YooKassaError::validation(format!(
            "{} must not be empty",
            field_name
        )));
    }
    Ok(())
}

/// Checks a value used as a single URL path segment (an object id).
///
/// Dot segments, separators (including `\`, which URL parsers treat as `/`)
/// and control characters are refused.
pub fn validate_path_segment(field_name: &str, value: &str) -> Result<()> {
    validate_present(field_name, value)?;
    if value == "." || value == ".." {
        return Err(YooKassaError::validation(format!(
            "{} '{}' is not a valid id",
            field_name, value
        )));
    }
    if value.contains(['/', '\\', '?', '#']) || value.chars().any(char::is_control) {
        return Err(YooKassaError::validation(format!(
            "{} '{}' contains characters not allowed in an id",
            field_name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.yookassa.ru/v3/").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("123456".to_string());
        let absent: Option<String> = None;

        assert_eq!(validate_required_field("account_id", &present).unwrap(), "123456");
        assert!(matches!(
            validate_required_field("account_id", &absent),
            Err(YooKassaError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string_hides_value() {
        assert!(validate_non_empty_string("secret_key", "test_abc").is_ok());
        match validate_non_empty_string("secret_key", "   ") {
            Err(YooKassaError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "secret_key");
                assert!(value.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30, 1, 600).is_ok());
        assert!(validate_range("timeout_seconds", 0, 1, 600).is_err());
        assert!(validate_range("timeout_seconds", 601, 1, 600).is_err());
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("payment_id", "22e12f66-000f-5000-8000-18db351245c7").is_ok());
        assert!(validate_path_segment("payment_id", "").is_err());
        assert!(validate_path_segment("payment_id", "abc/cancel").is_err());
        assert!(validate_path_segment("payment_id", "abc?x=1").is_err());
        assert!(validate_path_segment("payment_id", "..").is_err());
        assert!(validate_path_segment("payment_id", ".").is_err());
        assert!(validate_path_segment("payment_id", "a\\..\\..\\me").is_err());
        assert!(validate_path_segment("payment_id", ".\t.").is_err());
        assert!(validate_path_segment("payment_id", "...").is_ok());
    }
}
