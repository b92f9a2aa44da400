pub mod client;
pub mod deals;
pub mod payments;
pub mod payouts;
pub mod receipts;
pub mod refunds;
pub mod settings;

pub use crate::domain::ports::CredentialsProvider;
pub use crate::utils::error::Result;
pub use client::Client;
