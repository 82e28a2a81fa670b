//! Email Delivery Module
//!
//! Notifier implementations for verification emails. The registration flow
//! only needs a yes/no answer from each send; retries and queuing are left
//! to the relay.
//!
//! - **Logging notifier**: writes messages to the log for development
//! - **HTTP notifier**: POSTs messages to a mail relay endpoint

pub mod http;
pub mod logging;

#[cfg(test)]
mod tests;

pub use http::{HttpEmailConfig, HttpEmailNotifier};
pub use logging::LoggingEmailNotifier;

use ra_core::services::Notifier;
use ra_shared::config::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

/// Create the notifier selected by the email configuration
///
/// # Errors
///
/// `InfrastructureError::Config` when the HTTP provider has no relay URL,
/// `InfrastructureError::Http` when the HTTP client cannot be built
pub fn create_notifier(config: &EmailConfig) -> Result<Box<dyn Notifier>, InfrastructureError> {
    match config.provider {
        EmailProvider::Log => {
            tracing::info!("Using logging email notifier");
            Ok(Box::new(LoggingEmailNotifier::new()))
        }
        EmailProvider::Http => {
            let http_config = HttpEmailConfig::from_email_config(config)?;
            Ok(Box::new(HttpEmailNotifier::new(http_config)?))
        }
    }
}
