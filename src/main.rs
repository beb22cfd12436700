use commerce_analytics::{build_server, create_pool, run_migrations, Config, StartupError};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().inspect_err(|e| log::error!("{}", e))?;
    log::debug!("Loaded {:?}", config);

    let pool = create_pool(&config.database_url, config.pool_max_size)
        .inspect_err(|e| log::error!("Failed to create database connection pool: {}", e))?;
    run_migrations(&pool)?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);
    log::info!(
        "Swagger UI available at http://{}:{}/docs/",
        config.host,
        config.port
    );

    build_server(pool.clone(), &config.host, config.port)?.await?;

    let state = pool.state();
    log::info!(
        "Server stopped; closing database pool ({} connections, {} idle)",
        state.connections,
        state.idle_connections
    );
    drop(pool);
    Ok(())
}
