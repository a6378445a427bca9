use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::calendar_event::EventType;
use crate::dto::api::{ListResponse, page_bounds};
use crate::dto::calendar_event::CalendarEventPayload;
use crate::repository::{CalendarEventListQuery, DieselRepository};
use crate::routes::{error_response, validation_response};
use crate::services::calendar_event as calendar_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    event_type: Option<EventType>,
}

#[get("/calendar")]
pub async fn list_calendar_events(
    params: web::Query<CalendarListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, limit) = page_bounds(params.page, params.limit);
    let mut query = CalendarEventListQuery::new().paginate(page, limit);
    if let Some(search) = &params.search {
        query = query.search(search.as_str());
    }
    if let Some(from) = params.from {
        query = query.from(from);
    }
    if let Some(to) = params.to {
        query = query.to(to);
    }
    if let Some(event_type) = params.event_type {
        query = query.event_type(event_type);
    }

    match calendar_service::list_calendar_events(repo.get_ref(), query) {
        Ok((total, events)) => HttpResponse::Ok().json(ListResponse::new(events, total, page, limit)),
        Err(err) => error_response(err),
    }
}

#[get("/calendar/{event_id}")]
pub async fn get_calendar_event(
    event_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match calendar_service::get_calendar_event(repo.get_ref(), event_id.into_inner()) {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(err) => error_response(err),
    }
}

#[post("/calendar")]
pub async fn create_calendar_event(
    payload: web::Json<CalendarEventPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match calendar_service::create_calendar_event(repo.get_ref(), &payload.into()) {
        Ok(event) => HttpResponse::Created().json(event),
        Err(err) => error_response(err),
    }
}

#[put("/calendar/{event_id}")]
pub async fn update_calendar_event(
    event_id: web::Path<i32>,
    payload: web::Json<CalendarEventPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = payload.into_inner();
    if let Err(err) = payload.validate() {
        return validation_response(&err);
    }

    match calendar_service::update_calendar_event(
        repo.get_ref(),
        event_id.into_inner(),
        &payload.into(),
    ) {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(err) => error_response(err),
    }
}

#[delete("/calendar/{event_id}")]
pub async fn delete_calendar_event(
    event_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match calendar_service::delete_calendar_event(repo.get_ref(), event_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
