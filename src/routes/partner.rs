use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::domain::partner::{PartnerStatus, PartnerTier};
use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::partner::PartnerPayload;
use crate::repository::{DieselRepository, PartnerListQuery};
use crate::routes::{error_response, validation_response};
use crate::services::partner as partner_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    status: Option<PartnerStatus>,
    tier: Option<PartnerTier>,
}

#[get("/partners")]
pub async fn list_partners(
    params: web::Query<PartnerListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = PartnerListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }
    if let Some(status) = params.status {
        query = query.status(status);
    }
    if let Some(tier) = params.tier {
        query = query.tier(tier);
    }

    match partner_service::list_partners(repo.get_ref(), query) {
        Ok((total, partners)) => HttpResponse::Ok().json(ListResponse::new(partners, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/partners/{partner_id}")]
pub async fn get_partner(
    partner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match partner_service::get_partner(repo.get_ref(), partner_id.into_inner()) {
        Ok(partner) => HttpResponse::Ok().json(partner),
        Err(err) => error_response(err),
    }
}

#[post("/partners")]
pub async fn create_partner(
    payload: web::Json<PartnerPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match partner_service::create_partner(repo.get_ref(), &payload.into()) {
        Ok(partner) => HttpResponse::Created().json(partner),
        Err(err) => error_response(err),
    }
}

#[put("/partners/{partner_id}")]
pub async fn update_partner(
    partner_id: web::Path<i32>,
    payload: web::Json<PartnerPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match partner_service::update_partner(repo.get_ref(), partner_id.into_inner(), &payload.into())
    {
        Ok(partner) => HttpResponse::Ok().json(partner),
        Err(err) => error_response(err),
    }
}

#[delete("/partners/{partner_id}")]
pub async fn delete_partner(
    partner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match partner_service::delete_partner(repo.get_ref(), partner_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
