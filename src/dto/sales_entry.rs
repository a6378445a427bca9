use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::sales_entry::{NewSalesEntry, PaymentStatus, UpdateSalesEntry};

/// Request body for sales entries. The transaction amount is always derived
/// from quantity and unit price server-side and cannot be submitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesEntryPayload {
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub sale_date: NaiveDate,
    /// Defaults to `pending` when omitted.
    pub payment_status: Option<PaymentStatus>,
}

impl From<SalesEntryPayload> for NewSalesEntry {
    fn from(payload: SalesEntryPayload) -> Self {
        NewSalesEntry {
            partner_id: payload.partner_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
            sale_date: payload.sale_date,
            payment_status: payload.payment_status.unwrap_or_default(),
        }
    }
}

impl From<SalesEntryPayload> for UpdateSalesEntry {
    fn from(payload: SalesEntryPayload) -> Self {
        UpdateSalesEntry {
            partner_id: payload.partner_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
            sale_date: payload.sale_date,
            payment_status: payload.payment_status.unwrap_or_default(),
        }
    }
}
