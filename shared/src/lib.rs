//! Shared utilities and common types for the RegAuth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The `{code, data}` response envelope and its message codes
//! - Utility functions (email normalisation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment, LoggingConfig,
    ServerConfig,
};
pub use types::{HttpBody, MessageCode};
pub use utils::email;
