#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::ClientConfig;

#[cfg(feature = "cli")]
use crate::utils::error::{Result, YooKassaError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Clone, Parser)]
#[command(name = "yookassa")]
#[command(about = "Command-line client for the YooKassa payments API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML file with credentials and HTTP settings")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "YOOKASSA_ACCOUNT_ID")]
    pub account_id: Option<String>,

    #[arg(long, global = true, env = "YOOKASSA_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    #[arg(long, global = true, env = "YOOKASSA_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Idempotence-Key sent with POST requests")]
    pub idempotency_key: Option<String>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file with command-line values; the command
    /// line wins.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => {
                let account_id = self.account_id.clone().ok_or_else(|| {
                    YooKassaError::MissingConfigError {
                        field: "account_id".to_string(),
                    }
                })?;
                let secret_key = self.secret_key.clone().ok_or_else(|| {
                    YooKassaError::MissingConfigError {
                        field: "secret_key".to_string(),
                    }
                })?;
                ClientConfig::new(account_id, secret_key)
            }
        };

        if let Some(account_id) = &self.account_id {
            config.credentials.account_id = account_id.clone();
        }
        if let Some(secret_key) = &self.secret_key {
            config.credentials.secret_key = secret_key.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.http.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.http.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }
}
