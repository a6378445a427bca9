//! CSV import endpoints. Each entity exposes a template download and a
//! multipart upload that answers with an import summary.

use actix_multipart::form::MultipartForm;
use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::import::UploadCsvForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::import as import_service;

fn csv_attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition::attachment(filename.to_string()))
        .body(body)
}

#[get("/accounts/import/template")]
pub async fn accounts_import_template() -> impl Responder {
    csv_attachment("accounts.csv", import_service::accounts_template())
}

#[get("/contacts/import/template")]
pub async fn contacts_import_template() -> impl Responder {
    csv_attachment("contacts.csv", import_service::contacts_template())
}

#[get("/partners/import/template")]
pub async fn partners_import_template() -> impl Responder {
    csv_attachment("partners.csv", import_service::partners_template())
}

#[post("/accounts/import")]
pub async fn accounts_import(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadCsvForm>,
) -> impl Responder {
    match import_service::import_accounts(repo.get_ref(), form.csv.file.as_file()) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}

#[post("/contacts/import")]
pub async fn contacts_import(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadCsvForm>,
) -> impl Responder {
    match import_service::import_contacts(repo.get_ref(), form.csv.file.as_file()) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}

#[post("/partners/import")]
pub async fn partners_import(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadCsvForm>,
) -> impl Responder {
    match import_service::import_partners(repo.get_ref(), form.csv.file.as_file()) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
