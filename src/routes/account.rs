use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::dto::account::AccountPayload;
use crate::dto::api::{ListParams, ListResponse};
use crate::repository::{AccountListQuery, DieselRepository};
use crate::routes::{error_response, validation_response};
use crate::services::account as account_service;

#[get("/accounts")]
pub async fn list_accounts(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = params.bounds();
    let mut query = AccountListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }

    match account_service::list_accounts(repo.get_ref(), query) {
        Ok((total, accounts)) => HttpResponse::Ok().json(ListResponse::new(accounts, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/accounts/{account_id}")]
pub async fn get_account(
    account_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match account_service::get_account(repo.get_ref(), account_id.into_inner()) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(err) => error_response(err),
    }
}

#[post("/accounts")]
pub async fn create_account(
    payload: web::Json<AccountPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match account_service::create_account(repo.get_ref(), &payload.into()) {
        Ok(account) => HttpResponse::Created().json(account),
        Err(err) => error_response(err),
    }
}

#[put("/accounts/{account_id}")]
pub async fn update_account(
    account_id: web::Path<i32>,
    payload: web::Json<AccountPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match account_service::update_account(repo.get_ref(), account_id.into_inner(), &payload.into())
    {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(err) => error_response(err),
    }
}

#[delete("/accounts/{account_id}")]
pub async fn delete_account(
    account_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match account_service::delete_account(repo.get_ref(), account_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
