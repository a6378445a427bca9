use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sku: String,
    /// Default unit price applied to quote line items referencing the product.
    pub base_price: f64,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub base_price: f64,
    pub active: bool,
}

impl NewProduct {
    #[must_use]
    pub fn new(name: String, sku: String, base_price: f64, active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            sku: sku.trim().to_uppercase(),
            base_price,
            active,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub sku: String,
    pub base_price: f64,
    pub active: bool,
}

impl UpdateProduct {
    #[must_use]
    pub fn new(name: String, sku: String, base_price: f64, active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            sku: sku.trim().to_uppercase(),
            base_price,
            active,
        }
    }
}
