//! Verification email configuration
//!
//! Holds the values the registration flow reads on every call: code TTL,
//! sender identity and the redirect target for each associated API. Redirect
//! targets are keyed `email_type_<associated_api>`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix under which redirect URLs are looked up
pub const REDIRECT_KEY_PREFIX: &str = "email_type_";

/// Default verification code lifetime (10 minutes)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 600;

/// Email transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Log messages instead of sending them
    Log,
    /// POST messages to an HTTP mail relay
    Http,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "mock" => Ok(EmailProvider::Log),
            "http" | "relay" => Ok(EmailProvider::Http),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Verification email configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Seconds until an issued verification code expires
    pub expiration_seconds: i64,

    /// Sender identity placed on outgoing mail
    pub sender: String,

    /// Redirect URLs keyed by `email_type_<associated_api>`
    #[serde(default)]
    pub redirect_urls: HashMap<String, String>,

    /// Transport used to deliver messages
    pub provider: EmailProvider,

    /// Mail relay endpoint (required for the HTTP provider)
    #[serde(default)]
    pub relay_url: Option<String>,

    /// Mail relay request timeout in seconds
    #[serde(default = "default_relay_timeout")]
    pub relay_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        let mut redirect_urls = HashMap::new();
        redirect_urls.insert(
            redirect_key("register_user"),
            "http://localhost:3000/register/profile".to_string(),
        );
        redirect_urls.insert(
            redirect_key("registration_progress"),
            "http://localhost:3000/register/progress".to_string(),
        );

        Self {
            expiration_seconds: DEFAULT_EXPIRATION_SECONDS,
            sender: String::from("no-reply@regauth.local"),
            redirect_urls,
            provider: EmailProvider::Log,
            relay_url: None,
            relay_timeout_secs: default_relay_timeout(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut redirect_urls = defaults.redirect_urls.clone();
        if let Ok(url) = std::env::var("EMAIL_REDIRECT_REGISTER_USER") {
            redirect_urls.insert(redirect_key("register_user"), url);
        }
        if let Ok(url) = std::env::var("EMAIL_REDIRECT_REGISTRATION_PROGRESS") {
            redirect_urls.insert(redirect_key("registration_progress"), url);
        }

        Self {
            expiration_seconds: std::env::var("EMAIL_EXPIRATION_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expiration_seconds),
            sender: std::env::var("EMAIL_SENDER").unwrap_or(defaults.sender),
            redirect_urls,
            provider: std::env::var("EMAIL_PROVIDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.provider),
            relay_url: std::env::var("EMAIL_RELAY_URL").ok(),
            relay_timeout_secs: std::env::var("EMAIL_RELAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.relay_timeout_secs),
        }
    }

    /// Redirect URL for an associated API, if configured
    pub fn redirect_url(&self, associated_api: &str) -> Option<&str> {
        self.redirect_urls
            .get(&redirect_key(associated_api))
            .map(String::as_str)
    }

    /// Validate the email configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.expiration_seconds <= 0 {
            return Err("Email expiration must be positive".to_string());
        }

        if !crate::utils::email::is_valid_email(&self.sender) {
            return Err(format!("Email sender is not a valid address: {}", self.sender));
        }

        if self.provider == EmailProvider::Http && self.relay_url.is_none() {
            return Err("EMAIL_RELAY_URL is required for the http provider".to_string());
        }

        Ok(())
    }
}

/// Build the settings key for an associated API's redirect URL
pub fn redirect_key(associated_api: &str) -> String {
    format!("{}{}", REDIRECT_KEY_PREFIX, associated_api)
}

fn default_relay_timeout() -> u64 {
    10
}
