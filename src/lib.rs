#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

/// Registers every API handler under the given scope. Shared with the
/// integration tests so they exercise the same routing table.
#[cfg(feature = "server")]
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    use crate::routes::{
        account, calendar_event, contact, import, partner, product, quote, sales_entry,
    };

    cfg.service(account::list_accounts)
        .service(account::get_account)
        .service(account::create_account)
        .service(account::update_account)
        .service(account::delete_account)
        .service(contact::list_contacts)
        .service(contact::get_contact)
        .service(contact::create_contact)
        .service(contact::update_contact)
        .service(contact::delete_contact)
        .service(partner::list_partners)
        .service(partner::get_partner)
        .service(partner::create_partner)
        .service(partner::update_partner)
        .service(partner::delete_partner)
        .service(product::list_products)
        .service(product::get_product)
        .service(product::create_product)
        .service(product::update_product)
        .service(product::delete_product)
        .service(quote::list_quotes)
        .service(quote::get_quote)
        .service(quote::create_quote)
        .service(quote::update_quote)
        .service(quote::delete_quote)
        .service(calendar_event::list_calendar_events)
        .service(calendar_event::get_calendar_event)
        .service(calendar_event::create_calendar_event)
        .service(calendar_event::update_calendar_event)
        .service(calendar_event::delete_calendar_event)
        .service(sales_entry::list_sales_entries)
        .service(sales_entry::get_sales_entry)
        .service(sales_entry::create_sales_entry)
        .service(sales_entry::update_sales_entry)
        .service(sales_entry::delete_sales_entry)
        .service(import::accounts_import_template)
        .service(import::accounts_import)
        .service(import::contacts_import_template)
        .service(import::contacts_import)
        .service(import::partners_import_template)
        .service(import::partners_import);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").configure(configure_api))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
