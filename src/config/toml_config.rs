use crate::domain::ports::{CredentialsProvider, DEFAULT_BASE_URL};
use crate::utils::error::{Result, YooKassaError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const ENV_ACCOUNT_ID: &str = "YOOKASSA_ACCOUNT_ID";
pub const ENV_SECRET_KEY: &str = "YOOKASSA_SECRET_KEY";
pub const ENV_BASE_URL: &str = "YOOKASSA_BASE_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "YOOKASSA_TIMEOUT_SECONDS";

const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Client settings, usually read from a TOML file:
///
/// ```toml
/// [credentials]
/// account_id = "${YOOKASSA_ACCOUNT_ID}"
/// secret_key = "${YOOKASSA_SECRET_KEY}"
///
/// [http]
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Clone, Deserialize)]
pub struct CredentialsConfig {
    pub account_id: String,
    pub secret_key: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("account_id", &self.account_id)
            .field("secret_key", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HttpConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(account_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: CredentialsConfig {
                account_id: account_id.into(),
                secret_key: secret_key.into(),
            },
            http: HttpConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(YooKassaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| YooKassaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Reads `YOOKASSA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = lookup(ENV_ACCOUNT_ID);
        let secret_key = lookup(ENV_SECRET_KEY);
        let account_id = validate_required_field(ENV_ACCOUNT_ID, &account_id)?;
        let secret_key = validate_required_field(ENV_SECRET_KEY, &secret_key)?;

        let timeout_seconds = match lookup(ENV_TIMEOUT_SECONDS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                YooKassaError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let mut config = Self::new(account_id.as_str(), secret_key.as_str());
        config.http.base_url = lookup(ENV_BASE_URL);
        config.http.timeout_seconds = timeout_seconds;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${YOOKASSA_SECRET_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("credentials.account_id", &self.credentials.account_id)?;
        validate_non_empty_string("credentials.secret_key", &self.credentials.secret_key)?;

        for (field, value) in [
            ("credentials.account_id", &self.credentials.account_id),
            ("credentials.secret_key", &self.credentials.secret_key),
        ] {
            if value.contains("${") {
                return Err(YooKassaError::ConfigValidationError {
                    field: field.to_string(),
                    message: "unresolved environment variable".to_string(),
                });
            }
        }

        if let Some(base_url) = &self.http.base_url {
            validate_url("http.base_url", base_url)?;
        }

        if let Some(timeout) = self.http.timeout_seconds {
            validate_range("http.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

impl CredentialsProvider for ClientConfig {
    fn account_id(&self) -> &str {
        &self.credentials.account_id
    }

    fn secret_key(&self) -> &str {
        &self.credentials.secret_key
    }

    fn base_url(&self) -> &str {
        self.http.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.http.user_agent.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
