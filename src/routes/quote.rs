use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::quote::QuoteStatus;
use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::quote::{QuotePayload, QuoteResponse};
use crate::repository::{DieselRepository, QuoteListQuery};
use crate::routes::error_response;
use crate::services::quote as quote_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    status: Option<QuoteStatus>,
    account_id: Option<i32>,
    partner_id: Option<i32>,
}

#[get("/quotes")]
pub async fn list_quotes(
    params: web::Query<QuoteListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = QuoteListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }
    if let Some(status) = params.status {
        query = query.status(status);
    }
    if let Some(account_id) = params.account_id {
        query = query.account_id(account_id);
    }
    if let Some(partner_id) = params.partner_id {
        query = query.partner_id(partner_id);
    }

    match quote_service::list_quotes(repo.get_ref(), query) {
        Ok((total, quotes)) => {
            let data: Vec<QuoteResponse> = quotes.into_iter().map(QuoteResponse::from).collect();
            HttpResponse::Ok().json(ListResponse::new(data, total, page, limit))
        }
        Err(err) => error_response(err),
    }
}

#[get("/quotes/{quote_id}")]
pub async fn get_quote(
    quote_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match quote_service::get_quote(repo.get_ref(), quote_id.into_inner()) {
        Ok(quote) => HttpResponse::Ok().json(QuoteResponse::from(quote)),
        Err(err) => error_response(err),
    }
}

#[post("/quotes")]
pub async fn create_quote(
    payload: web::Json<QuotePayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match quote_service::create_quote(repo.get_ref(), payload.into_inner()) {
        Ok(quote) => HttpResponse::Created().json(QuoteResponse::from(quote)),
        Err(err) => error_response(err),
    }
}

#[put("/quotes/{quote_id}")]
pub async fn update_quote(
    quote_id: web::Path<i32>,
    payload: web::Json<QuotePayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match quote_service::update_quote(repo.get_ref(), quote_id.into_inner(), payload.into_inner())
    {
        Ok(quote) => HttpResponse::Ok().json(QuoteResponse::from(quote)),
        Err(err) => error_response(err),
    }
}

#[delete("/quotes/{quote_id}")]
pub async fn delete_quote(
    quote_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match quote_service::delete_quote(repo.get_ref(), quote_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
