use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::amount::Amount;
use crate::core::models::links::{Link, PaginationLinks};

/// A forced reversal of a payment initiated by the cardholder's bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Deducted from the settlement; only set once the settlement happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Null until the chargeback has been reversed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(
        rename = "_links",
        default,
        skip_serializing_if = "ChargebackLinks::is_empty"
    )]
    pub links: ChargebackLinks,
}

impl Chargeback {
    pub fn is_reversed(&self) -> bool {
        self.reversed_at.is_some()
    }

    pub fn is_settled(&self) -> bool {
        self.settlement_amount.is_some()
    }
}

/// Links returned with a chargeback object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl ChargebackLinks {
    pub fn is_empty(&self) -> bool {
        self.self_link.is_none()
            && self.payment.is_none()
            && self.settlement.is_none()
            && self.documentation.is_none()
    }
}

/// The `_embedded` container of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackListEmbedded {
    #[serde(default)]
    pub chargebacks: Vec<Chargeback>,
}

impl ChargebackListEmbedded {
    pub fn is_empty(&self) -> bool {
        self.chargebacks.is_empty()
    }
}

fn is_zero(count: &u32) -> bool {
    *count == 0
}

/// One page of chargebacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackList {
    /// Number of chargebacks on this page
    #[serde(default, skip_serializing_if = "is_zero")]
    pub count: u32,
    #[serde(
        rename = "_embedded",
        default,
        skip_serializing_if = "ChargebackListEmbedded::is_empty"
    )]
    pub embedded: ChargebackListEmbedded,
    #[serde(rename = "_links", default, skip_serializing_if = "PaginationLinks::is_empty")]
    pub links: PaginationLinks,
}

impl ChargebackList {
    pub fn chargebacks(&self) -> &[Chargeback] {
        &self.embedded.chargebacks
    }

    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.links.previous.is_some()
    }
}
