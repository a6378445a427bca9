use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use partner_crm::repository::DieselRepository;

mod common;

macro_rules! test_app {
    ($test_db:expr) => {{
        let repo = DieselRepository::new($test_db.pool().clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(web::scope("/api").configure(partner_crm::configure_api)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_account_crud_over_http() {
    let test_db = common::TestDb::new("test_account_crud_over_http.db");
    let app = test_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({
            "name": "Acme",
            "industry": "Software",
            "email": "sales@acme.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], json!("Acme"));
    let account_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/accounts/{account_id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["email"], json!("sales@acme.com"));

    let req = test::TestRequest::put()
        .uri(&format!("/api/accounts/{account_id}"))
        .set_json(json!({ "name": "Acme Corp" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], json!("Acme Corp"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/accounts/{account_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/accounts/{account_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_list_envelope_and_pagination() {
    let test_db = common::TestDb::new("test_list_envelope_and_pagination.db");
    let app = test_app!(test_db);

    for i in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/api/accounts")
            .set_json(json!({ "name": format!("Account{i}") }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/accounts?page=1&limit=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], json!(3));
    assert_eq!(body["pagination"]["totalPages"], json!(2));
    assert_eq!(body["pagination"]["page"], json!(1));
    assert_eq!(body["pagination"]["limit"], json!(2));
}

#[actix_web::test]
async fn test_invalid_payload_is_rejected() {
    let test_db = common::TestDb::new("test_invalid_payload_is_rejected.db");
    let app = test_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({ "name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_quote_defaults_prices_and_discount() {
    let test_db = common::TestDb::new("test_quote_defaults_prices_and_discount.db");
    let app = test_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({ "name": "Acme" }))
        .to_request();
    let account: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/partners")
        .set_json(json!({
            "name": "Northwind",
            "contactEmail": "ops@northwind.io",
            "status": "approved",
            "tier": "elite",
            "discountRate": 10.0
        }))
        .to_request();
    let partner: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "Router X2",
            "sku": "RTR-X2",
            "basePrice": 100.0
        }))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;

    // No unit price, description, or discount in the payload: the product
    // supplies price and name, the partner supplies the discount.
    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "accountId": account["id"],
            "partnerId": partner["id"],
            "taxRate": 18.0,
            "items": [
                { "productId": product["id"], "quantity": 2 },
                { "description": "Setup fee", "quantity": 1, "unitPrice": 50.0 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let quote: Value = test::read_body_json(resp).await;

    assert_eq!(quote["quoteNumber"].as_str().unwrap().len(), 8); // Q-000001
    assert_eq!(quote["status"], json!("draft"));
    assert_eq!(quote["items"][0]["description"], json!("Router X2"));
    assert_eq!(quote["items"][0]["unitPrice"], json!(100.0));
    assert_eq!(quote["items"][1]["sortOrder"], json!(1));

    // subtotal 250, partner discount 10% = 25, taxable 225, tax 40.5
    assert_eq!(quote["totals"]["subtotal"], json!(250.0));
    assert_eq!(quote["totals"]["discount"], json!(25.0));
    assert_eq!(quote["totals"]["tax"], json!(40.5));
    assert_eq!(quote["totals"]["total"], json!(265.5));
}

#[actix_web::test]
async fn test_quote_with_unknown_product_is_rejected() {
    let test_db = common::TestDb::new("test_quote_with_unknown_product_is_rejected.db");
    let app = test_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({ "name": "Acme" }))
        .to_request();
    let account: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/quotes")
        .set_json(json!({
            "accountId": account["id"],
            "taxRate": 0.0,
            "items": [{ "productId": 999, "quantity": 1 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

fn multipart_csv_body(boundary: &str, csv: &str) -> Vec<u8> {
    format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"csv\"; filename=\"upload.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{boundary}--\r\n"
    )
    .into_bytes()
}

#[actix_web::test]
async fn test_accounts_csv_import_reports_row_errors() {
    let test_db = common::TestDb::new("test_accounts_csv_import.db");
    let app = test_app!(test_db);

    let boundary = "X-CSV-IMPORT-BOUNDARY";
    let csv = "name,email\nAcme,sales@acme.com\n,broken@row.com\n";

    let req = test::TestRequest::post()
        .uri("/api/accounts/import")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(multipart_csv_body(boundary, csv))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let outcome: Value = test::read_body_json(resp).await;

    assert_eq!(outcome["total"], json!(2));
    assert_eq!(outcome["imported"], json!(1));
    assert_eq!(outcome["errors"][0]["row"], json!(2));
    assert_eq!(outcome["errors"][0]["field"], json!("name"));

    let req = test::TestRequest::get().uri("/api/accounts").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["pagination"]["total"], json!(1));
}

#[actix_web::test]
async fn test_import_template_download() {
    let test_db = common::TestDb::new("test_import_template_download.db");
    let app = test_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/partners/import/template")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"name,contact_email"));
}
