use crate::domain::deal::Deal;
use crate::domain::payment::Payment;
use crate::domain::payout::Payout;
use crate::domain::refund::Refund;
use crate::utils::error::{Result, YooKassaError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationEvent {
    #[serde(rename = "payment.waiting_for_capture")]
    PaymentWaitingForCapture,
    #[serde(rename = "payment.succeeded")]
    PaymentSucceeded,
    #[serde(rename = "payment.canceled")]
    PaymentCanceled,
    #[serde(rename = "refund.succeeded")]
    RefundSucceeded,
    #[serde(rename = "payout.succeeded")]
    PayoutSucceeded,
    #[serde(rename = "payout.canceled")]
    PayoutCanceled,
    #[serde(rename = "deal.closed")]
    DealClosed,
}

/// Webhook body POSTed by YooKassa to the merchant's endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: String,
    pub event: NotificationEvent,
    pub object: serde_json::Value,
}

impl Notification {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn payment(&self) -> Result<Payment> {
        match self.event {
            NotificationEvent::PaymentWaitingForCapture
            | NotificationEvent::PaymentSucceeded
            | NotificationEvent::PaymentCanceled => self.decode_object(),
            _ => Err(self.mismatch("payment")),
        }
    }

    pub fn refund(&self) -> Result<Refund> {
        match self.event {
            NotificationEvent::RefundSucceeded => self.decode_object(),
            _ => Err(self.mismatch("refund")),
        }
    }

    pub fn payout(&self) -> Result<Payout> {
        match self.event {
            NotificationEvent::PayoutSucceeded | NotificationEvent::PayoutCanceled => {
                self.decode_object()
            }
            _ => Err(self.mismatch("payout")),
        }
    }

    pub fn deal(&self) -> Result<Deal> {
        match self.event {
            NotificationEvent::DealClosed => self.decode_object(),
            _ => Err(self.mismatch("deal")),
        }
    }

    fn decode_object<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.object)?)
    }

    fn mismatch(&self, expected: &str) -> YooKassaError {
        YooKassaError::validation(format!(
            "notification event {:?} does not carry a {}",
            self.event, expected
        ))
    }
}
