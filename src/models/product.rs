use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub base_price: f64,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    pub base_price: f64,
    pub active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    pub base_price: f64,
    pub active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            base_price: product.base_price,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str(),
            sku: product.sku.as_str(),
            base_price: product.base_price,
            active: product.active,
        }
    }
}

impl<'a> UpdateProduct<'a> {
    pub fn from_domain(updates: &'a DomainUpdateProduct, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_str(),
            sku: updates.sku.as_str(),
            base_price: updates.base_price,
            active: updates.active,
            updated_at,
        }
    }
}
