//! Types exchanged with the settings and notification collaborators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key selecting the template and redirect target of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociatedApi {
    /// Registration and resend of the registration code
    RegisterUser,
    /// Progress-inquiry code
    RegistrationProgress,
}

impl AssociatedApi {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociatedApi::RegisterUser => "register_user",
            AssociatedApi::RegistrationProgress => "registration_progress",
        }
    }
}

impl fmt::Display for AssociatedApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email settings resolved for one associated API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    /// Lifetime of an issued code, in seconds
    pub ttl_seconds: i64,
    /// Sender identity
    pub sender: String,
    /// Redirect target embedded in the message
    pub redirect_url: String,
    /// Template lookup key
    pub template_key: String,
}

/// A single templated message to deliver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub template_key: String,
    pub recipient: String,
    pub code: String,
    pub sender: String,
    pub redirect_url: String,
}

impl NotificationRequest {
    /// Build a request carrying `code` to `recipient` with resolved settings
    pub fn new(settings: &EmailSettings, recipient: &str, code: &str) -> Self {
        Self {
            template_key: settings.template_key.clone(),
            recipient: recipient.to_string(),
            code: code.to_string(),
            sender: settings.sender.clone(),
            redirect_url: settings.redirect_url.clone(),
        }
    }
}
