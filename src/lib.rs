use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use diesel_migrations::MigrationHarness;
use tera::Tera;

use crate::db::{MIGRATIONS, establish_connection_pool, get_connection};
use crate::models::auth::{API_USER, ApiTokens};
use crate::models::config::ServerConfig;
use crate::routes::admin::create_database;
use crate::routes::certifications::{
    create_record, get_all_certs, get_cert_by_id, get_certs_by_certtype, get_certs_by_keyword,
    get_certs_by_name, get_certs_by_name_keyword, get_certs_by_name_search,
    get_certs_by_name_status, get_invalid_certs, get_nodate_certs, get_valid_certs, search_certs,
};
use crate::routes::main::print_default;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod search;
pub mod services;

/// Registers every HTTP endpoint. Shared between [`run`] and the test
/// harness so both serve the identical surface.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(print_default)
        .service(get_all_certs)
        .service(get_nodate_certs)
        .service(get_invalid_certs)
        .service(get_valid_certs)
        .service(get_cert_by_id)
        .service(get_certs_by_name_status)
        .service(get_certs_by_name_keyword)
        .service(get_certs_by_name_search)
        .service(get_certs_by_name)
        .service(get_certs_by_keyword)
        .service(get_certs_by_certtype)
        .service(search_certs)
        .service(create_record)
        .service(create_database);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    {
        let mut conn = get_connection(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to get connection: {e}")))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    }

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // The flat credential set, built once and shared read-only.
    let tokens = ApiTokens::single(server_config.api_token.clone(), API_USER);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(tokens.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
