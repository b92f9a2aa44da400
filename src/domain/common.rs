use crate::utils::error::{Result, YooKassaError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Arbitrary key/value pairs attached to an object by the merchant.
pub type Metadata = BTreeMap<String, String>;

/// Money amount. `value` is a decimal string such as `"100.00"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    pub value: String,
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }

    pub fn rub(value: impl Into<String>) -> Self {
        Self::new(value, "RUB")
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::rub("0.00")
    }
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid amount pattern"))
}

fn currency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency pattern"))
}

impl Validate for Amount {
    fn validate(&self) -> Result<()> {
        if !amount_pattern().is_match(&self.value) {
            return Err(YooKassaError::validation(format!(
                "amount value '{}' must be a decimal with at most two fraction digits",
                self.value
            )));
        }
        if !currency_pattern().is_match(&self.currency) {
            return Err(YooKassaError::validation(format!(
                "currency '{}' must be an ISO-4217 alphabetic code",
                self.currency
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    Payout,
    Cashless,
    Prepayment,
    Postpayment,
    Consideration,
}

/// Information about money distribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    #[serde(rename = "type")]
    pub kind: SettlementType,
    pub amount: Amount,
}

impl Settlement {
    pub fn payout(amount: Amount) -> Self {
        Self {
            kind: SettlementType::Payout,
            amount,
        }
    }
}

/// The deal within which a payment is carried out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaymentDeal {
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settlements: Vec<Settlement>,
}

pub const DEAL_ID_MIN_LEN: usize = 36;
pub const DEAL_ID_MAX_LEN: usize = 50;

impl Validate for PaymentDeal {
    fn validate(&self) -> Result<()> {
        validate_deal_id(&self.id)?;
        for settlement in &self.settlements {
            settlement.amount.validate()?;
        }
        Ok(())
    }
}

pub(crate) fn validate_deal_id(id: &str) -> Result<()> {
    let len = id.chars().count();
    if !(DEAL_ID_MIN_LEN..=DEAL_ID_MAX_LEN).contains(&len) {
        return Err(YooKassaError::validation(format!(
            "deal id must be {}..={} characters long, got {}",
            DEAL_ID_MIN_LEN, DEAL_ID_MAX_LEN, len
        )));
    }
    Ok(())
}

/// Who canceled an object and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancellationDetails {
    pub party: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub gateway_id: String,
}

/// List envelope used by every `GET` collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Cursor for the next page; absent on the last one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}
