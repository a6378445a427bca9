//! Quote builder logic: line-item resolution, partner-driven discount
//! defaults, and persistence through the repository traits.

use std::collections::HashMap;

use crate::domain::quote::{
    NewQuote, NewQuoteItem, Quote, QuoteItemInput, QuoteStatus, UpdateQuote,
};
use crate::domain::types::sanitized_opt;
use crate::dto::quote::QuotePayload;
use crate::repository::{
    PartnerReader, ProductReader, QuoteListQuery, QuoteReader, QuoteWriter,
};
use crate::services::{ServiceError, ServiceResult};

pub fn get_quote<R>(repo: &R, quote_id: i32) -> ServiceResult<Quote>
where
    R: QuoteReader + ?Sized,
{
    repo.get_quote_by_id(quote_id)?.ok_or(ServiceError::NotFound)
}

pub fn list_quotes<R>(repo: &R, query: QuoteListQuery) -> ServiceResult<(usize, Vec<Quote>)>
where
    R: QuoteReader + ?Sized,
{
    repo.list_quotes(query).map_err(ServiceError::from)
}

/// Resolves submitted line items against the product catalog.
///
/// A line naming a product takes its unit price from the product's base
/// price unless the caller supplied one explicitly, and an omitted
/// description falls back to the product name. `sort_order` is assigned
/// contiguously from 0 in payload order, so dropping a line re-indexes the
/// remainder.
pub fn resolve_line_items<R>(
    repo: &R,
    inputs: &[QuoteItemInput],
) -> ServiceResult<Vec<NewQuoteItem>>
where
    R: ProductReader + ?Sized,
{
    let product_ids: Vec<i32> = inputs.iter().filter_map(|item| item.product_id).collect();
    let products = repo.get_products_by_ids(&product_ids)?;
    let products: HashMap<i32, _> = products.into_iter().map(|p| (p.id, p)).collect();

    inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| {
            if input.quantity < 1 {
                return Err(ServiceError::Validation(format!(
                    "line {idx}: quantity must be at least 1"
                )));
            }

            let product = match input.product_id {
                Some(product_id) => Some(products.get(&product_id).ok_or_else(|| {
                    ServiceError::Validation(format!("line {idx}: unknown product {product_id}"))
                })?),
                None => None,
            };

            let unit_price = match (input.unit_price, product) {
                (Some(price), _) => price,
                (None, Some(product)) => product.base_price,
                (None, None) => {
                    return Err(ServiceError::Validation(format!(
                        "line {idx}: unit price is required without a product"
                    )));
                }
            };

            let description = input
                .description
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .or_else(|| product.map(|p| p.name.clone()))
                .ok_or_else(|| {
                    ServiceError::Validation(format!(
                        "line {idx}: description is required without a product"
                    ))
                })?;

            Ok(NewQuoteItem {
                product_id: input.product_id,
                description,
                quantity: input.quantity,
                unit_price,
                sort_order: idx as i32,
            })
        })
        .collect()
}

/// Defaults the quote-level discount from the partner's tier rate when the
/// caller did not provide one.
fn default_discount<R>(
    repo: &R,
    partner_id: Option<i32>,
    discount: Option<f64>,
    items: &[NewQuoteItem],
) -> ServiceResult<f64>
where
    R: PartnerReader + ?Sized,
{
    if let Some(discount) = discount {
        if discount < 0.0 {
            return Err(ServiceError::Validation(
                "discount cannot be negative".into(),
            ));
        }
        return Ok(discount);
    }

    let Some(partner_id) = partner_id else {
        return Ok(0.0);
    };
    let partner = repo
        .get_partner_by_id(partner_id)?
        .ok_or_else(|| ServiceError::Validation(format!("unknown partner {partner_id}")))?;

    let Some(rate) = partner.discount_rate else {
        return Ok(0.0);
    };
    let subtotal: f64 = items
        .iter()
        .map(|item| f64::from(item.quantity) * item.unit_price)
        .sum();

    Ok(subtotal * rate / 100.0)
}

pub fn create_quote<R>(repo: &R, payload: QuotePayload) -> ServiceResult<Quote>
where
    R: QuoteWriter + ProductReader + PartnerReader + ?Sized,
{
    if payload.tax_rate < 0.0 {
        return Err(ServiceError::Validation("tax rate cannot be negative".into()));
    }

    let items = resolve_line_items(repo, &payload.items)?;
    let discount = default_discount(repo, payload.partner_id, payload.discount, &items)?;

    let new_quote = NewQuote::new(
        payload.quote_number,
        payload.account_id,
        payload.partner_id,
        payload.status.unwrap_or(QuoteStatus::Draft),
        discount,
        payload.tax_rate,
        payload.valid_until,
        payload.notes,
        payload.terms,
        items,
    );

    repo.create_quote(&new_quote).map_err(ServiceError::from)
}

pub fn update_quote<R>(repo: &R, quote_id: i32, payload: QuotePayload) -> ServiceResult<Quote>
where
    R: QuoteWriter + QuoteReader + ProductReader + PartnerReader + ?Sized,
{
    if payload.tax_rate < 0.0 {
        return Err(ServiceError::Validation("tax rate cannot be negative".into()));
    }

    let existing = repo.get_quote_by_id(quote_id)?.ok_or(ServiceError::NotFound)?;

    let items = resolve_line_items(repo, &payload.items)?;
    let discount = default_discount(repo, payload.partner_id, payload.discount, &items)?;

    let updates = UpdateQuote {
        account_id: payload.account_id,
        partner_id: payload.partner_id,
        status: payload.status.unwrap_or(existing.status),
        discount,
        tax_rate: payload.tax_rate,
        valid_until: payload.valid_until,
        notes: sanitized_opt(payload.notes),
        terms: sanitized_opt(payload.terms),
        items,
    };

    repo.update_quote(quote_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_quote<R>(repo: &R, quote_id: i32) -> ServiceResult<()>
where
    R: QuoteWriter + ?Sized,
{
    repo.delete_quote(quote_id).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn product(id: i32, name: &str, base_price: f64) -> Product {
        let now = Utc::now().naive_utc();
        Product {
            id,
            name: name.to_string(),
            sku: format!("SKU-{id}"),
            base_price,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo_with_products(products: Vec<Product>) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_get_products_by_ids()
            .returning(move |ids| {
                Ok(products
                    .iter()
                    .filter(|p| ids.contains(&p.id))
                    .cloned()
                    .collect())
            });
        repo
    }

    #[test]
    fn product_selection_fills_unit_price_and_description() {
        let repo = repo_with_products(vec![product(5, "Router X2", 199.0)]);
        let inputs = vec![QuoteItemInput {
            product_id: Some(5),
            description: None,
            quantity: 2,
            unit_price: None,
        }];

        let resolved = resolve_line_items(&repo, &inputs).unwrap();
        assert_eq!(resolved[0].unit_price, 199.0);
        assert_eq!(resolved[0].description, "Router X2");
    }

    #[test]
    fn explicit_unit_price_wins_over_base_price() {
        let repo = repo_with_products(vec![product(5, "Router X2", 199.0)]);
        let inputs = vec![QuoteItemInput {
            product_id: Some(5),
            description: Some("Discounted router".to_string()),
            quantity: 1,
            unit_price: Some(150.0),
        }];

        let resolved = resolve_line_items(&repo, &inputs).unwrap();
        assert_eq!(resolved[0].unit_price, 150.0);
        assert_eq!(resolved[0].description, "Discounted router");
    }

    #[test]
    fn sort_order_is_reassigned_contiguously() {
        let repo = repo_with_products(vec![]);
        // Two remaining lines after the caller removed the middle one.
        let inputs = vec![
            QuoteItemInput {
                product_id: None,
                description: Some("First".to_string()),
                quantity: 1,
                unit_price: Some(10.0),
            },
            QuoteItemInput {
                product_id: None,
                description: Some("Third".to_string()),
                quantity: 1,
                unit_price: Some(30.0),
            },
        ];

        let resolved = resolve_line_items(&repo, &inputs).unwrap();
        assert_eq!(resolved[0].sort_order, 0);
        assert_eq!(resolved[1].sort_order, 1);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let repo = repo_with_products(vec![]);
        let inputs = vec![QuoteItemInput {
            product_id: Some(42),
            description: None,
            quantity: 1,
            unit_price: None,
        }];

        assert!(matches!(
            resolve_line_items(&repo, &inputs),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn missing_price_without_product_is_rejected() {
        let repo = repo_with_products(vec![]);
        let inputs = vec![QuoteItemInput {
            product_id: None,
            description: Some("Consulting".to_string()),
            quantity: 1,
            unit_price: None,
        }];

        assert!(matches!(
            resolve_line_items(&repo, &inputs),
            Err(ServiceError::Validation(_))
        ));
    }
}
