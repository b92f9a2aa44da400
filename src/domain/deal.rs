use crate::domain::common::{Amount, Metadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    SafeDeal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Opened,
    Closed,
}

/// When YooKassa takes its commission from the deal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeeMoment {
    PaymentSucceeded,
    DealClosed,
}

/// Request body for `POST deals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDeal {
    #[serde(rename = "type")]
    pub kind: DealType,
    pub fee_moment: FeeMoment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl NewDeal {
    pub fn safe_deal(fee_moment: FeeMoment) -> Self {
        Self {
            kind: DealType::SafeDeal,
            fee_moment,
            description: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DealType,
    pub fee_moment: FeeMoment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Money received from the buyer and not yet paid out.
    pub balance: Amount,
    /// Money available for payouts to the seller.
    pub payout_balance: Amount,
    pub status: DealStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub test: bool,
}

/// Query parameters for `GET deals`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct DealFilter {
    #[serde(rename = "created_at.gte", skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.gt", skip_serializing_if = "Option::is_none")]
    pub created_at_gt: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.lte", skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
    #[serde(rename = "created_at.lt", skip_serializing_if = "Option::is_none")]
    pub created_at_lt: Option<DateTime<Utc>>,
    #[serde(rename = "expires_at.gte", skip_serializing_if = "Option::is_none")]
    pub expires_at_gte: Option<DateTime<Utc>>,
    #[serde(rename = "expires_at.lt", skip_serializing_if = "Option::is_none")]
    pub expires_at_lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
    /// Matched against the deal description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
