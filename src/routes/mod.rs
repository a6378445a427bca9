//! HTTP handlers for the JSON API. Each entity gets its own module; this
//! module holds the shared error mapping.

use actix_web::HttpResponse;

use crate::dto::api::ErrorBody;
use crate::services::ServiceError;

pub mod account;
pub mod calendar_event;
pub mod contact;
pub mod import;
pub mod partner;
pub mod product;
pub mod quote;
pub mod sales_entry;

/// Maps a service failure onto its HTTP status with an `{ "error": ... }`
/// body. Internal details are logged, not leaked.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("not found")),
        ServiceError::Validation(msg) => HttpResponse::BadRequest().json(ErrorBody::new(msg)),
        ServiceError::Conflict(msg) => HttpResponse::Conflict().json(ErrorBody::new(msg)),
        ServiceError::Internal(msg) => {
            log::error!("request failed: {msg}");
            HttpResponse::InternalServerError().json(ErrorBody::new("internal server error"))
        }
    }
}

/// 400 response for a rejected request payload.
pub(crate) fn validation_response(err: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
}
