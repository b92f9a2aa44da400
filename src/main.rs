use clap::Parser;
use yookassa_sdk::app::commands;
use yookassa_sdk::utils::logger;
use yookassa_sdk::{CliConfig, Client, ErrorCategory, YooKassaError};

fn exit_code(error: &YooKassaError) -> i32 {
    match error.category() {
        ErrorCategory::Api => 1,
        ErrorCategory::Config | ErrorCategory::Validation => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::Decode => 4,
    }
}

fn fail(error: YooKassaError) -> ! {
    tracing::error!("❌ {} (category: {:?})", error, error.category());
    if let Some(api_error) = error.api_error() {
        tracing::error!("Request id for support: {}", api_error.id);
    }
    eprintln!("❌ {}", error);
    std::process::exit(exit_code(&error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting yookassa CLI");

    let config = cli.resolve().unwrap_or_else(|e| fail(e));
    let client = Client::from_config(&config).unwrap_or_else(|e| fail(e));
    tracing::debug!("Using API at {}", client.base_url());

    let output = commands::run(&client, &cli.command, cli.idempotency_key.as_deref())
        .await
        .unwrap_or_else(|e| fail(e));

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
