use crate::core::client::{resource_path, Client};
use crate::domain::common::ListResponse;
use crate::domain::deal::{Deal, DealFilter, NewDeal};
use crate::utils::error::Result;

pub const DEALS_ENDPOINT: &str = "deals";

/// Works with requests related to safe deals.
#[derive(Debug, Clone)]
pub struct DealHandler<'a> {
    client: &'a Client,
    idempotency_key: Option<String>,
}

impl<'a> DealHandler<'a> {
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

    pub async fn create_deal(&self, deal: &NewDeal) -> Result<Deal> {
        self.client
            .post(DEALS_ENDPOINT, Some(deal), self.idempotency_key.as_deref())
            .await
    }

    pub async fn find_deal(&self, deal_id: &str) -> Result<Deal> {
        let endpoint = resource_path(DEALS_ENDPOINT, deal_id, None)?;
        self.client.get(&endpoint).await
    }

    pub async fn find_deals(&self, filter: &DealFilter) -> Result<ListResponse<Deal>> {
        self.client.get_with_params(DEALS_ENDPOINT, filter).await
    }
}
