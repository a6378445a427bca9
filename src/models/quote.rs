use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::quote::{
    NewQuote as DomainNewQuote, NewQuoteItem as DomainNewQuoteItem, Quote as DomainQuote,
    QuoteLineItem as DomainQuoteLineItem, UpdateQuote as DomainUpdateQuote,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::quotes)]
/// Diesel model for [`crate::domain::quote::Quote`] (header row, no items).
pub struct Quote {
    pub id: i32,
    pub quote_number: String,
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: String,
    pub discount: f64,
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::quote_items)]
#[diesel(belongs_to(Quote, foreign_key = quote_id))]
pub struct QuoteItem {
    pub id: i32,
    pub quote_id: i32,
    pub product_id: Option<i32>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuote<'a> {
    pub quote_number: &'a str,
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: String,
    pub discount: f64,
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub terms: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quote_items)]
pub struct NewQuoteItem<'a> {
    pub quote_id: i32,
    pub product_id: Option<i32>,
    pub description: &'a str,
    pub quantity: i32,
    pub unit_price: f64,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateQuote<'a> {
    pub account_id: i32,
    pub partner_id: Option<i32>,
    pub status: String,
    pub discount: f64,
    pub tax_rate: f64,
    pub valid_until: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub terms: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<QuoteItem> for DomainQuoteLineItem {
    fn from(item: QuoteItem) -> Self {
        Self {
            id: item.id,
            quote_id: item.quote_id,
            product_id: item.product_id,
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            sort_order: item.sort_order,
        }
    }
}

impl Quote {
    /// Assembles the domain quote from the header row and its item rows.
    pub fn into_domain(self, items: Vec<QuoteItem>) -> Result<DomainQuote, TypeConstraintError> {
        Ok(DomainQuote {
            id: self.id,
            quote_number: self.quote_number,
            account_id: self.account_id,
            partner_id: self.partner_id,
            status: self.status.parse()?,
            discount: self.discount,
            tax_rate: self.tax_rate,
            valid_until: self.valid_until,
            notes: self.notes,
            terms: self.terms,
            items: items.into_iter().map(Into::into).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> NewQuote<'a> {
    pub fn from_domain(quote: &'a DomainNewQuote, quote_number: &'a str) -> Self {
        Self {
            quote_number,
            account_id: quote.account_id,
            partner_id: quote.partner_id,
            status: quote.status.to_string(),
            discount: quote.discount,
            tax_rate: quote.tax_rate,
            valid_until: quote.valid_until,
            notes: quote.notes.as_deref(),
            terms: quote.terms.as_deref(),
        }
    }
}

impl<'a> NewQuoteItem<'a> {
    pub fn from_domain(item: &'a DomainNewQuoteItem, quote_id: i32) -> Self {
        Self {
            quote_id,
            product_id: item.product_id,
            description: item.description.as_str(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            sort_order: item.sort_order,
        }
    }
}

impl<'a> UpdateQuote<'a> {
    pub fn from_domain(updates: &'a DomainUpdateQuote, updated_at: NaiveDateTime) -> Self {
        Self {
            account_id: updates.account_id,
            partner_id: updates.partner_id,
            status: updates.status.to_string(),
            discount: updates.discount,
            tax_rate: updates.tax_rate,
            valid_until: updates.valid_until,
            notes: updates.notes.as_deref(),
            terms: updates.terms.as_deref(),
            updated_at,
        }
    }
}
