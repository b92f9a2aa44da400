use crate::domain::common::{
    validate_deal_id, Amount, CancellationDetails, ListResponse, Metadata,
};
use crate::utils::error::{Result, YooKassaError};
use crate::utils::validation::{validate_present, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    Succeeded,
    Canceled,
}

/// Card attributes. Requests carry `number`, responses carry the masked fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PayoutCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
}

/// Where the money goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayoutDestination {
    /// Faster Payments System transfer to a phone number.
    Sbp {
        phone: String,
        bank_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recipient_checked: Option<bool>,
    },
    BankCard { card: PayoutCard },
    YooMoney { account_number: String },
}

impl PayoutDestination {
    pub fn sbp(phone: impl Into<String>, bank_id: impl Into<String>) -> Self {
        PayoutDestination::Sbp {
            phone: phone.into(),
            bank_id: bank_id.into(),
            recipient_checked: None,
        }
    }

    pub fn bank_card(number: impl Into<String>) -> Self {
        PayoutDestination::BankCard {
            card: PayoutCard {
                number: Some(number.into()),
                ..Default::default()
            },
        }
    }

    pub fn yoo_money(account_number: impl Into<String>) -> Self {
        PayoutDestination::YooMoney {
            account_number: account_number.into(),
        }
    }
}

impl Validate for PayoutDestination {
    fn validate(&self) -> Result<()> {
        match self {
            PayoutDestination::Sbp { phone, bank_id, .. } => {
                validate_present("payout_destination_data.phone", phone)?;
                validate_present("payout_destination_data.bank_id", bank_id)
            }
            PayoutDestination::BankCard { card } => match card.number.as_deref() {
                Some(number) => validate_present("payout_destination_data.card.number", number),
                None => Err(YooKassaError::validation("bank card payout requires a card number")),
            },
            PayoutDestination::YooMoney { account_number } => validate_present(
                "payout_destination_data.account_number",
                account_number,
            ),
        }
    }
}

/// Safe deal reference on a payout; only the id is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutDeal {
    pub id: String,
}

/// Request body for `POST payouts`.
///
/// A payout goes either to `payout_destination_data`, to a `payout_token`
/// produced by the payout widget, or to a saved `payment_method_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPayout {
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_destination_data: Option<PayoutDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<PayoutDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl NewPayout {
    pub fn new(amount: Amount, destination: PayoutDestination) -> Self {
        Self {
            amount,
            payout_destination_data: Some(destination),
            payout_token: None,
            payment_method_id: None,
            description: None,
            deal: None,
            metadata: None,
        }
    }
}

impl Validate for NewPayout {
    fn validate(&self) -> Result<()> {
        self.amount.validate()?;

        let targets = [
            self.payout_destination_data.is_some(),
            self.payout_token.is_some(),
            self.payment_method_id.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if targets != 1 {
            return Err(YooKassaError::validation(
                "payout needs exactly one of payout_destination_data, payout_token, payment_method_id",
            ));
        }

        if let Some(destination) = &self.payout_destination_data {
            destination.validate()?;
        }
        if let Some(deal) = &self.deal {
            validate_deal_id(&deal.id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub id: String,
    pub amount: Amount,
    pub status: PayoutStatus,
    pub payout_destination: PayoutDestination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<PayoutDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_details: Option<CancellationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub test: bool,
}

/// A bank participating in the Faster Payments System.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SbpBank {
    pub bank_id: String,
    pub name: String,
    pub bic: String,
}

pub type SbpBankList = ListResponse<SbpBank>;
