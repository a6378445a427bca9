use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_products<R>(repo: &R, query: ProductListQuery) -> ServiceResult<(usize, Vec<Product>)>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(query).map_err(ServiceError::from)
}

pub fn create_product<R>(repo: &R, new_product: &NewProduct) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if new_product.base_price < 0.0 {
        return Err(ServiceError::Validation(
            "base price cannot be negative".into(),
        ));
    }
    repo.create_product(new_product).map_err(ServiceError::from)
}

pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    updates: &UpdateProduct,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if updates.base_price < 0.0 {
        return Err(ServiceError::Validation(
            "base price cannot be negative".into(),
        ));
    }
    repo.update_product(product_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}
