//! Mail relay notifier
//!
//! POSTs each `NotificationRequest` as JSON to a relay endpoint. A 2xx
//! response counts as delivered; anything else, including a timeout, is a
//! failed send. There is no retry.

use async_trait::async_trait;
use std::time::Duration;

use ra_core::services::{NotificationRequest, Notifier};
use ra_shared::config::EmailConfig;
use ra_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Mail relay configuration
#[derive(Debug, Clone)]
pub struct HttpEmailConfig {
    /// Relay endpoint receiving the JSON message
    pub relay_url: String,
    /// Timeout for relay requests in seconds
    pub request_timeout_secs: u64,
}

impl HttpEmailConfig {
    /// Take the relay settings from the email configuration
    pub fn from_email_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let relay_url = config.relay_url.clone().ok_or_else(|| {
            InfrastructureError::Config("EMAIL_RELAY_URL is required for the http provider".to_string())
        })?;

        Self::validated(relay_url, config.relay_timeout_secs)
    }

    fn validated(relay_url: String, request_timeout_secs: u64) -> Result<Self, InfrastructureError> {
        if !(relay_url.starts_with("http://") || relay_url.starts_with("https://")) {
            return Err(InfrastructureError::Config(format!(
                "EMAIL_RELAY_URL must be an http(s) URL, got {}",
                relay_url
            )));
        }
        if request_timeout_secs == 0 {
            return Err(InfrastructureError::Config(
                "EMAIL_RELAY_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        Ok(Self {
            relay_url,
            request_timeout_secs,
        })
    }
}

/// Notifier delivering through an HTTP mail relay
pub struct HttpEmailNotifier {
    client: reqwest::Client,
    config: HttpEmailConfig,
}

impl HttpEmailNotifier {
    /// Create a new relay notifier
    pub fn new(config: HttpEmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        tracing::info!("HTTP email notifier initialized for relay {}", config.relay_url);

        Ok(Self { client, config })
    }

    async fn post(&self, request: &NotificationRequest) -> Result<(), InfrastructureError> {
        let response = self
            .client
            .post(&self.config.relay_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(InfrastructureError::Email(format!(
                "Relay responded with status {}",
                status
            )))
        }
    }
}

#[async_trait]
impl Notifier for HttpEmailNotifier {
    async fn send(&self, request: &NotificationRequest) -> bool {
        match self.post(request).await {
            Ok(()) => {
                tracing::info!(
                    recipient = %mask_email(&request.recipient),
                    template = %request.template_key,
                    "Verification email handed to relay"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    recipient = %mask_email(&request.recipient),
                    template = %request.template_key,
                    error = %e,
                    "Failed to deliver verification email"
                );
                false
            }
        }
    }
}
