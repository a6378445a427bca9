use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, sanitized_opt};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
}

impl Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStatus::Draft => write!(f, "draft"),
            QuoteStatus::Sent => write!(f, "sent"),
            QuoteStatus::Accepted => write!(f, "accepted"),
            QuoteStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for QuoteStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(QuoteStatus::Draft),
            "sent" => Ok(QuoteStatus::Sent),
            "accepted" => Ok(QuoteStatus::Accepted),
            "rejected" => Ok(QuoteStatus::Rejected),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown quote status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    pub id: i32,
    pub quote_id: i32,
    pub product_id: Option<i32>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub sort_order: i32,
}

impl QuoteLineItem {
    /// Extended price of the line (`quantity × unit_price`).
    #[must_use]
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i32,
    pub quote_number: String,
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: QuoteStatus,
    /// Absolute discount amount subtracted from the subtotal.
    pub discount: f64,
    /// Tax rate in percent applied to the discounted subtotal.
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub items: Vec<QuoteLineItem>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Quote {
    /// Derives subtotal, tax, and total for this quote.
    #[must_use]
    pub fn totals(&self) -> QuoteTotals {
        QuoteTotals::calculate(&self.items, self.discount, self.tax_rate)
    }
}

/// Derived amounts for a quote. Never stored, always recomputed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

impl QuoteTotals {
    /// Computes totals from line items, an absolute discount, and a tax rate
    /// in percent.
    ///
    /// Tax is charged on the discounted subtotal and clamped at zero when the
    /// discount exceeds the subtotal. The total itself is not clamped: a
    /// discount larger than the subtotal yields a negative total.
    #[must_use]
    pub fn calculate(items: &[QuoteLineItem], discount: f64, tax_rate: f64) -> Self {
        let subtotal: f64 = items.iter().map(QuoteLineItem::line_total).sum();
        let taxable = subtotal - discount;
        let tax = taxable.max(0.0) * tax_rate / 100.0;
        Self {
            subtotal,
            discount,
            tax,
            total: taxable + tax,
        }
    }
}

/// Line item as submitted by the caller. `unit_price` and `description` may
/// be omitted when `product_id` is set; the service layer fills them from the
/// product's base price and name.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItemInput {
    pub product_id: Option<i32>,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit_price: Option<f64>,
}

/// Fully resolved line item ready for persistence. `sort_order` is assigned
/// contiguously from 0 in payload order.
#[derive(Clone, Debug, PartialEq)]
pub struct NewQuoteItem {
    pub product_id: Option<i32>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub sort_order: i32,
}

#[derive(Clone, Debug)]
pub struct NewQuote {
    /// Server-assigned when `None` (`Q-{id:06}`).
    pub quote_number: Option<String>,
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: QuoteStatus,
    pub discount: f64,
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub items: Vec<NewQuoteItem>,
}

impl NewQuote {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        quote_number: Option<String>,
        account_id: i32,
        partner_id: Option<i32>,
        status: QuoteStatus,
        discount: f64,
        tax_rate: f64,
        valid_until: Option<NaiveDate>,
        notes: Option<String>,
        terms: Option<String>,
        items: Vec<NewQuoteItem>,
    ) -> Self {
        Self {
            quote_number: quote_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            account_id,
            partner_id,
            status,
            discount,
            tax_rate,
            valid_until,
            notes: sanitized_opt(notes),
            terms: sanitized_opt(terms),
            items,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UpdateQuote {
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: QuoteStatus,
    pub discount: f64,
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    /// Replaces the stored item set; ordering drives `sort_order`.
    pub items: Vec<NewQuoteItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, unit_price: f64) -> QuoteLineItem {
        QuoteLineItem {
            id: 0,
            quote_id: 0,
            product_id: None,
            description: "item".to_string(),
            quantity,
            unit_price,
            sort_order: 0,
        }
    }

    #[test]
    fn totals_with_discount_and_tax() {
        let items = vec![item(2, 100.0), item(1, 50.0)];
        let totals = QuoteTotals::calculate(&items, 0.0, 18.0);
        assert_eq!(totals.subtotal, 250.0);
        assert_eq!(totals.tax, 45.0);
        assert_eq!(totals.total, 295.0);
    }

    #[test]
    fn discount_exceeding_subtotal_yields_zero_tax_and_negative_total() {
        let items = vec![item(1, 100.0)];
        let totals = QuoteTotals::calculate(&items, 150.0, 18.0);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, -50.0);
    }

    #[test]
    fn totals_of_empty_quote_are_zero() {
        let totals = QuoteTotals::calculate(&[], 0.0, 18.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn line_total_multiplies_quantity_and_price() {
        assert_eq!(item(3, 19.99).line_total(), 59.97);
    }
}
