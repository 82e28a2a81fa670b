//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RegAuth service,
//! following Clean Architecture principles. It provides concrete
//! implementations of the repository and notifier traits declared in
//! `ra_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL account and profile repositories using SQLx
//! - **Email**: notifiers that log messages or POST them to a mail relay
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use std::sync::Arc;

use ra_core::services::Notifier;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery module
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles:
    //! - Database connection strings
    //! - Email transport and verification settings

    use serde::{Deserialize, Serialize};

    pub use ra_shared::config::{DatabaseConfig, EmailConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Email configuration
        pub email: EmailConfig,
    }
}

/// Load infrastructure configuration from the environment
///
/// A `.env` file is loaded first when present.
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let database = ra_shared::config::DatabaseConfig::from_env();
    let email = ra_shared::config::EmailConfig::from_env();
    email.validate().map_err(InfrastructureError::Config)?;

    Ok(config::InfrastructureConfig { database, email })
}

/// Infrastructure service container
#[cfg(feature = "mysql")]
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Shared connection pool
    pub pool: database::DatabasePool,
    /// Account persistence
    pub accounts: Arc<database::MySqlAccountRepository>,
    /// Profile persistence
    pub profiles: Arc<database::MySqlProfileRepository>,
    /// Configured email transport
    pub notifier: Arc<Box<dyn Notifier>>,
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - The database connection pool and repositories
/// - The email notifier selected by `EMAIL_PROVIDER`
#[cfg(feature = "mysql")]
pub async fn initialize(
    config: &config::InfrastructureConfig,
) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = database::DatabasePool::new(config.database.clone()).await?;
    let accounts = Arc::new(database::MySqlAccountRepository::new(pool.get_pool().clone()));
    let profiles = Arc::new(database::MySqlProfileRepository::new(pool.get_pool().clone()));
    let notifier = Arc::new(email::create_notifier(&config.email)?);

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        pool,
        accounts,
        profiles,
        notifier,
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),
}
