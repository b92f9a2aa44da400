use crate::core::client::{resource_path, Client};
use crate::domain::common::ListResponse;
use crate::domain::receipt::{NewReceipt, Receipt, ReceiptFilter};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const RECEIPTS_ENDPOINT: &str = "receipts";

/// Works with requests related to fiscal receipts.
#[derive(Debug, Clone)]
pub struct ReceiptHandler<'a> {
    client: &'a Client,
    idempotency_key: Option<String>,
}

impl<'a> ReceiptHandler<'a> {
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

    pub async fn create_receipt(&self, receipt: &NewReceipt) -> Result<Receipt> {
        receipt.validate()?;
        self.client
            .post(RECEIPTS_ENDPOINT, Some(receipt), self.idempotency_key.as_deref())
            .await
    }

    pub async fn find_receipt(&self, receipt_id: &str) -> Result<Receipt> {
        let endpoint = resource_path(RECEIPTS_ENDPOINT, receipt_id, None)?;
        self.client.get(&endpoint).await
    }

    pub async fn find_receipts(&self, filter: &ReceiptFilter) -> Result<ListResponse<Receipt>> {
        self.client.get_with_params(RECEIPTS_ENDPOINT, filter).await
    }
}
