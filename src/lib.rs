//! Client SDK for the [YooKassa](https://yookassa.ru) payments API (v3).
//!
//! ```no_run
//! use yookassa_sdk::domain::payout::{NewPayout, PayoutDestination};
//! use yookassa_sdk::domain::common::Amount;
//! use yookassa_sdk::Client;
//!
//! # async fn demo() -> yookassa_sdk::Result<()> {
//! let client = Client::new("123456", "test_secret");
//!
//! let banks = client.payouts().get_sbp_banks().await?;
//! let payout = NewPayout::new(
//!     Amount::rub("320.00"),
//!     PayoutDestination::sbp("79000000000", banks[0].bank_id.clone()),
//! );
//! let created = client
//!     .payouts()
//!     .with_idempotency_key("payout-order-37")
//!     .create_payout(&payout)
//!     .await?;
//! println!("payout {} is {:?}", created.id, created.status);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ClientConfig;
pub use crate::core::{client::Client, CredentialsProvider};
pub use domain::api_error::{ApiError, ApiErrorCode};
pub use utils::error::{ErrorCategory, Result, YooKassaError};
