use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use ra_api::app::create_app_with_payload_limit;
use ra_api::AppState;
use ra_core::services::{ProfileService, RegistrationService, StaticSettingsProvider};
use ra_infra::config::InfrastructureConfig;
use ra_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // RUST_LOG still overrides the per-environment level
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting RegAuth API Server");

    config
        .validate()
        .map_err(|message| anyhow::anyhow!("Invalid configuration: {}", message))?;
    info!("Environment: {}", config.environment);

    let infra_config = InfrastructureConfig {
        database: config.database.clone(),
        email: config.email.clone(),
    };
    let infra = ra_infra::initialize(&infra_config)
        .await
        .context("Failed to initialize infrastructure")?;

    let settings = Arc::new(StaticSettingsProvider::new(config.email.clone()));
    let registration_service = Arc::new(RegistrationService::new(
        infra.accounts.clone(),
        infra.notifier.clone(),
        settings,
    ));
    let profile_service = Arc::new(ProfileService::new(
        infra.accounts.clone(),
        infra.profiles.clone(),
    ));

    let app_state = web::Data::new(AppState {
        registration_service,
        profile_service,
    });

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    info!("Server will bind to: {}", bind_address);

    let pool = web::Data::new(infra.pool.clone());
    let mut server = HttpServer::new(move || {
        create_app_with_payload_limit(app_state.clone(), max_payload_size)
            .app_data(pool.clone())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    infra.pool.close().await;

    Ok(())
}
