use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.yookassa.ru/v3/";

/// Source of credentials and connection settings for a [`crate::Client`].
pub trait CredentialsProvider: Send + Sync {
    fn account_id(&self) -> &str;
    fn secret_key(&self) -> &str;

    fn base_url(&self) -> &str {
        DEFAULT_BASE_URL
    }

    fn timeout(&self) -> Option<Duration> {
        None
    }

    fn user_agent(&self) -> Option<&str> {
        None
    }
}
