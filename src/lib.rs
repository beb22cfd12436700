pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod openapi;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::analytics_service::AnalyticsService;
pub use config::{Config, ConfigError};
pub use db::{create_pool, DbPool};
pub use errors::StartupError;

use infrastructure::DieselAnalyticsRepository;
use openapi::ApiDoc;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create any missing tables. Existing tables are left untouched.
pub fn run_migrations(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Register the `/analytics` routes. Expects `web::Data<AnalyticsService>` in
/// the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics")
            .route(
                "/top-customers",
                web::get().to(handlers::analytics::top_customers),
            )
            .route(
                "/monthly-sales",
                web::get().to(handlers::analytics::monthly_sales),
            )
            .route(
                "/unsold-products",
                web::get().to(handlers::analytics::unsold_products),
            )
            .route(
                "/average-order-value",
                web::get().to(handlers::analytics::average_order_value),
            )
            .route(
                "/frequent-buyers",
                web::get().to(handlers::analytics::frequent_buyers),
            ),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = AnalyticsService::new(DieselAnalyticsRepository::new(pool));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .wrap(Logger::default())
            .configure(configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind((host.to_string(), port))?
    .run())
}
