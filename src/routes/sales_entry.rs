use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::sales_entry::PaymentStatus;
use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::sales_entry::SalesEntryPayload;
use crate::repository::{DieselRepository, SalesEntryListQuery};
use crate::routes::error_response;
use crate::services::sales_entry as sales_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesListParams {
    page: Option<usize>,
    limit: Option<usize>,
    partner_id: Option<i32>,
    payment_status: Option<PaymentStatus>,
}

#[get("/sales")]
pub async fn list_sales_entries(
    params: web::Query<SalesListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = SalesEntryListQuery::new().paginate(page, limit);
    if let Some(partner_id) = params.partner_id {
        query = query.partner_id(partner_id);
    }
    if let Some(payment_status) = params.payment_status {
        query = query.payment_status(payment_status);
    }

    match sales_service::list_sales_entries(repo.get_ref(), query) {
        Ok((total, entries)) => HttpResponse::Ok().json(ListResponse::new(entries, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/sales/{entry_id}")]
pub async fn get_sales_entry(
    entry_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match sales_service::get_sales_entry(repo.get_ref(), entry_id.into_inner()) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(err) => error_response(err),
    }
}

#[post("/sales")]
pub async fn create_sales_entry(
    payload: web::Json<SalesEntryPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match sales_service::create_sales_entry(repo.get_ref(), &payload.into_inner().into()) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(err) => error_response(err),
    }
}

#[put("/sales/{entry_id}")]
pub async fn update_sales_entry(
    entry_id: web::Path<i32>,
    payload: web::Json<SalesEntryPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match sales_service::update_sales_entry(
        repo.get_ref(),
        entry_id.into_inner(),
        &payload.into_inner().into(),
    ) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(err) => error_response(err),
    }
}

#[delete("/sales/{entry_id}")]
pub async fn delete_sales_entry(
    entry_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match sales_service::delete_sales_entry(repo.get_ref(), entry_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
