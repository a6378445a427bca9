use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "overdue" => Ok(PaymentStatus::Overdue),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesEntry {
    pub id: i32,
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    /// Always `quantity × unit_price`, derived server-side.
    pub amount: f64,
    pub sale_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSalesEntry {
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub sale_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl NewSalesEntry {
    /// Transaction amount derived from quantity and unit price.
    #[must_use]
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSalesEntry {
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub sale_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl UpdateSalesEntry {
    #[must_use]
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
