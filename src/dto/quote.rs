use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::quote::{Quote, QuoteItemInput, QuoteStatus, QuoteTotals};

/// Request body for creating or replacing a quote. Line items are submitted
/// whole; the stored set is replaced on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    /// Server-assigned when omitted.
    pub quote_number: Option<String>,
    pub account_id: i32,
    pub partner_id: Option<i32>,
    /// Defaults to `draft` on create; keeps the stored status on update.
    pub status: Option<QuoteStatus>,
    /// Absolute amount. When omitted, the partner's tier discount rate is
    /// applied to the subtotal.
    pub discount: Option<f64>,
    #[serde(default)]
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub items: Vec<QuoteItemInput>,
}

/// Quote as returned by the API: the stored fields plus derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: Quote,
    pub totals: QuoteTotals,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        let totals = quote.totals();
        Self { quote, totals }
    }
}
