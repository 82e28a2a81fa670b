//! Config-backed settings provider

use async_trait::async_trait;
use ra_shared::config::EmailConfig;
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};

use super::traits::SettingsProvider;
use super::types::{AssociatedApi, EmailSettings};

/// Serves email settings from an `EmailConfig` that can be swapped at runtime
///
/// Each lookup reads the current config, so a `replace` takes effect on the
/// next registration call.
pub struct StaticSettingsProvider {
    config: RwLock<EmailConfig>,
}

impl StaticSettingsProvider {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replace the served configuration
    pub async fn replace(&self, config: EmailConfig) {
        *self.config.write().await = config;
    }
}

#[async_trait]
impl SettingsProvider for StaticSettingsProvider {
    async fn email_settings(&self, api: AssociatedApi) -> DomainResult<EmailSettings> {
        let config = self.config.read().await;

        let redirect_url = config
            .redirect_url(api.as_str())
            .ok_or_else(|| DomainError::Configuration {
                message: format!("No redirect URL configured for {}", api),
            })?
            .to_string();

        Ok(EmailSettings {
            ttl_seconds: config.expiration_seconds,
            sender: config.sender.clone(),
            redirect_url,
            template_key: api.as_str().to_string(),
        })
    }
}
