use crate::core::client::{resource_path, Client};
use crate::domain::payout::{NewPayout, Payout, SbpBank, SbpBankList};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const SBP_BANKS_ENDPOINT: &str = "sbp_banks";
pub const PAYOUTS_ENDPOINT: &str = "payouts";

/// Works with requests related to payouts.
#[derive(Debug, Clone)]
pub struct PayoutHandler<'a> {
    client: &'a Client,
    idempotency_key: Option<String>,
}

impl<'a> PayoutHandler<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            idempotency_key: None,
        }
    }

    pub fn with_idempotency_key(&self, key: impl Into<String>) -> Self {
        Self {
            client: self.client,
            idempotency_key: Some(key.into()),
        }
    }

    /// Banks that accept Faster Payments System payouts.
    pub async fn get_sbp_banks(&self) -> Result<Vec<SbpBank>> {
        let banks: SbpBankList = self.client.get(SBP_BANKS_ENDPOINT).await?;
        Ok(banks.items)
    }

    pub async fn create_payout(&self, payout: &NewPayout) -> Result<Payout> {
        payout.validate()?;
        self.client
            .post(PAYOUTS_ENDPOINT, Some(payout), self.idempotency_key.as_deref())
            .await
    }

    pub async fn get_payout(&self, payout_id: &str) -> Result<Payout> {
        let endpoint = resource_path(PAYOUTS_ENDPOINT, payout_id, None)?;
        self.client.get(&endpoint).await
    }
}
