use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::contact::ContactPayload;
use crate::repository::{ContactListQuery, DieselRepository};
use crate::routes::{error_response, validation_response};
use crate::services::contact as contact_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    account_id: Option<i32>,
}

#[get("/contacts")]
pub async fn list_contacts(
    params: web::Query<ContactListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = ContactListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }
    if let Some(account_id) = params.account_id {
        query = query.account_id(account_id);
    }

    match contact_service::list_contacts(repo.get_ref(), query) {
        Ok((total, contacts)) => HttpResponse::Ok().json(ListResponse::new(contacts, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/contacts/{contact_id}")]
pub async fn get_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::get_contact(repo.get_ref(), contact_id.into_inner()) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err),
    }
}

#[post("/contacts")]
pub async fn create_contact(
    payload: web::Json<ContactPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match contact_service::create_contact(repo.get_ref(), &payload.into()) {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(err) => error_response(err),
    }
}

#[put("/contacts/{contact_id}")]
pub async fn update_contact(
    contact_id: web::Path<i32>,
    payload: web::Json<ContactPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match contact_service::update_contact(repo.get_ref(), contact_id.into_inner(), &payload.into())
    {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err),
    }
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contact_service::delete_contact(repo.get_ref(), contact_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
