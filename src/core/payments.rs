use crate::core::client::{resource_path, Client};
use crate::domain::common::ListResponse;
use crate::domain::payment::{CapturePayment, NewPayment, Payment, PaymentFilter};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const PAYMENTS_ENDPOINT: &str = "payments";

/// Works with requests related to payments.
#[derive(Debug, Clone)]
pub struct PaymentHandler<'a> {
    client: &'a Client,
    idempotency_key: Option<String>,
}

impl<'a> PaymentHandler<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            idempotency_key: None,
        }
    }

    /// Returns a copy of the handler that sends `key` with every `POST`.
    pub fn with_idempotency_key(&self, key: impl Into<String>) -> Self {
        Self {
            client: self.client,
            idempotency_key: Some(key.into()),
        }
    }

    pub async fn create_payment(&self, payment: &NewPayment) -> Result<Payment> {
        payment.validate()?;
        self.client
            .post(PAYMENTS_ENDPOINT, Some(payment), self.idempotency_key.as_deref())
            .await
    }

    pub async fn find_payment(&self, payment_id: &str) -> Result<Payment> {
        let endpoint = resource_path(PAYMENTS_ENDPOINT, payment_id, None)?;
        self.client.get(&endpoint).await
    }

    /// Confirms a two-stage payment. `None` captures the full authorised amount.
    pub async fn capture_payment(
        &self,
        payment_id: &str,
        capture: Option<&CapturePayment>,
    ) -> Result<Payment> {
        if let Some(capture) = capture {
            capture.validate()?;
        }
        let endpoint = resource_path(PAYMENTS_ENDPOINT, payment_id, Some("capture"))?;
        self.client
            .post(&endpoint, capture, self.idempotency_key.as_deref())
            .await
    }

    pub async fn cancel_payment(&self, payment_id: &str) -> Result<Payment> {
        let endpoint = resource_path(PAYMENTS_ENDPOINT, payment_id, Some("cancel"))?;
        self.client
            .post::<_, ()>(&endpoint, None, self.idempotency_key.as_deref())
            .await
    }

    pub async fn find_payments(&self, filter: &PaymentFilter) -> Result<ListResponse<Payment>> {
        self.client.get_with_params(PAYMENTS_ENDPOINT, filter).await
    }
}
