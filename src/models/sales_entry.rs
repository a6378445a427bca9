use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::sales_entry::{
    NewSalesEntry as DomainNewSalesEntry, SalesEntry as DomainSalesEntry,
    UpdateSalesEntry as DomainUpdateSalesEntry,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::sales_entries)]
/// Diesel model for [`crate::domain::sales_entry::SalesEntry`].
pub struct SalesEntry {
    pub id: i32,
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub amount: f64,
    pub sale_date: NaiveDate,
    pub payment_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sales_entries)]
pub struct NewSalesEntry {
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub amount: f64,
    pub sale_date: NaiveDate,
    pub payment_status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sales_entries)]
pub struct UpdateSalesEntry {
    pub partner_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub amount: f64,
    pub sale_date: NaiveDate,
    pub payment_status: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<SalesEntry> for DomainSalesEntry {
    type Error = TypeConstraintError;

    fn try_from(entry: SalesEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id,
            partner_id: entry.partner_id,
            product_id: entry.product_id,
            quantity: entry.quantity,
            unit_price: entry.unit_price,
            amount: entry.amount,
            sale_date: entry.sale_date,
            payment_status: entry.payment_status.parse()?,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
    }
}

impl From<&DomainNewSalesEntry> for NewSalesEntry {
    fn from(entry: &DomainNewSalesEntry) -> Self {
        Self {
            partner_id: entry.partner_id,
            product_id: entry.product_id,
            quantity: entry.quantity,
            unit_price: entry.unit_price,
            amount: entry.amount(),
            sale_date: entry.sale_date,
            payment_status: entry.payment_status.to_string(),
        }
    }
}

impl UpdateSalesEntry {
    pub fn from_domain(updates: &DomainUpdateSalesEntry, updated_at: NaiveDateTime) -> Self {
        Self {
            partner_id: updates.partner_id,
            product_id: updates.product_id,
            quantity: updates.quantity,
            unit_price: updates.unit_price,
            amount: updates.amount(),
            sale_date: updates.sale_date,
            payment_status: updates.payment_status.to_string(),
            updated_at,
        }
    }
}
