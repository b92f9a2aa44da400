use crate::core::client::{resource_path, Client};
use crate::domain::common::ListResponse;
use crate::domain::refund::{NewRefund, Refund, RefundFilter};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const REFUNDS_ENDPOINT: &str = "refunds";

/// Works with requests related to refunds.
#[derive(Debug, Clone)]
pub struct RefundHandler<'a> {
    client: &'a Client,
    idempotency_key: Option<String>,
}

impl<'a> RefundHandler<'a> {
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

    pub async fn create_refund(&self, refund: &NewRefund) -> Result<Refund> {
        refund.validate()?;
        self.client
            .post(REFUNDS_ENDPOINT, Some(refund), self.idempotency_key.as_deref())
            .await
    }

    pub async fn find_refund(&self, refund_id: &str) -> Result<Refund> {
        let endpoint = resource_path(REFUNDS_ENDPOINT, refund_id, None)?;
        self.client.get(&endpoint).await
    }

    pub async fn find_refunds(&self, filter: &RefundFilter) -> Result<ListResponse<Refund>> {
        self.client.get_with_params(REFUNDS_ENDPOINT, filter).await
    }
}
