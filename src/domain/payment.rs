//! Payments: the object itself, the request bodies that create or capture it,
//! and the query filter used to list payments.

use crate::domain::common::{Amount, CancellationDetails, Metadata, PaymentDeal, Recipient};
use crate::domain::receipt::{PaymentReceipt, ReceiptRegistration};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    WaitingForCapture,
    Succeeded,
    Canceled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    BankCard,
    YooMoney,
    Sbp,
    Sberbank,
    TinkoffBank,
    SberLoan,
    MobileBalance,
    B2bSberbank,
    ElectronicCertificate,
    Cash,
    #[serde(other)]
    Unknown,
}

/// Payment method as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    pub id: String,
    pub saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Method specific attributes (card data, payer bank details, ...).
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Payment method data supplied when creating a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodData {
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl PaymentMethodData {
    pub fn of(kind: PaymentMethodType) -> Self {
        Self {
            kind,
            details: serde_json::Map::new(),
        }
    }
}

/// How the user confirms a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Confirmation {
    Redirect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enforce: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    Embedded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_token: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    External {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    Qr {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_data: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    MobileApplication {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
}

impl Confirmation {
    pub fn redirect(return_url: impl Into<String>) -> Self {
        Confirmation::Redirect {
            confirmation_url: None,
            return_url: Some(return_url.into()),
            enforce: None,
            locale: None,
        }
    }

    /// URL or token the user has to be sent to, when the API issued one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Confirmation::Redirect {
                confirmation_url, ..
            }
            | Confirmation::MobileApplication {
                confirmation_url, ..
            } => confirmation_url.as_deref(),
            Confirmation::Embedded {
                confirmation_token, ..
            } => confirmation_token.as_deref(),
            Confirmation::Qr {
                confirmation_data, ..
            } => confirmation_data.as_deref(),
            Confirmation::External { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: String,
    pub status: PaymentStatus,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    #[serde(default)]
    pub test: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<Amount>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub refundable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_registration: Option<ReceiptRegistration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_details: Option<CancellationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<PaymentDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
}

/// Request body for `POST payments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewPayment {
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<PaymentReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_payment_method: Option<bool>,
    /// Capture automatically on success instead of waiting for `capture_payment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<PaymentDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
}

impl Validate for NewPayment {
    fn validate(&self) -> Result<()> {
        self.amount.validate()?;
        if let Some(deal) = &self.deal {
            deal.validate()?;
        }
        Ok(())
    }
}

/// Request body for `POST payments/{id}/capture`. An empty body captures the
/// full amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CapturePayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<PaymentReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<PaymentDeal>,
}

impl Validate for CapturePayment {
    fn validate(&self) -> Result<()> {
        if let Some(amount) = &self.amount {
            amount.validate()?;
        }
        if let Some(deal) = &self.deal {
            deal.validate()?;
        }
        Ok(())
    }
}

/// Query parameters for `GET payments`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PaymentFilter {
    #[serde(rename = "created_at.gte", skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.gt", skip_serializing_if = "Option::is_none")]
    pub created_at_gt: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.lte", skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.lt", skip_serializing_if = "Option::is_none")]
    pub created_at_lt: Option<DateTime<Utc>>,
    #[serde(rename = "captured_at.gte", skip_serializing_if = "Option::is_none")]
    pub captured_at_gte: Option<DateTime<Utc>>,
    #[serde(rename = "captured_at.lt", skip_serializing_if = "Option::is_none")]
    pub captured_at_lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
