use crate::domain::common::Amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Enabled,
    Disabled,
}

/// Store or gateway settings returned by `GET me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSettings {
    pub account_id: String,
    pub status: AccountStatus,
    pub test: bool,
    #[serde(default)]
    pub fiscalization_enabled: bool,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub payout_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_balance: Option<Amount>,
}

impl AccountSettings {
    pub fn supports_payment_method(&self, method: &str) -> bool {
        self.payment_methods.iter().any(|m| m == method)
    }
}
