use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::product::ProductPayload;
use crate::repository::{DieselRepository, ProductListQuery};
use crate::routes::{error_response, validation_response};
use crate::services::product as product_service;

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    active: Option<bool>,
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = ProductListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }
    if let Some(active) = params.active {
        query = query.active(active);
    }

    match product_service::list_products(repo.get_ref(), query) {
        Ok((total, products)) => HttpResponse::Ok().json(ListResponse::new(products, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::get_product(repo.get_ref(), product_id.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[post("/products")]
pub async fn create_product(
    payload: web::Json<ProductPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match product_service::create_product(repo.get_ref(), &payload.into()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    payload: web::Json<ProductPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match product_service::update_product(repo.get_ref(), product_id.into_inner(), &payload.into())
    {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::delete_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
