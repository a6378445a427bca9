use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "sku cannot be empty"))]
    pub sku: String,
    pub base_price: f64,
    /// Defaults to active when omitted.
    pub active: Option<bool>,
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        NewProduct::new(
            payload.name,
            payload.sku,
            payload.base_price,
            payload.active.unwrap_or(true),
        )
    }
}

impl From<ProductPayload> for UpdateProduct {
    fn from(payload: ProductPayload) -> Self {
        UpdateProduct::new(
            payload.name,
            payload.sku,
            payload.base_price,
            payload.active.unwrap_or(true),
        )
    }
}
