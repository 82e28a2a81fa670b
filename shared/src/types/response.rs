//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message code carried in every response body
///
/// The wire names are fixed; note `Forbidden` is not upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCode {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "Forbidden")]
    Forbidden,
    #[serde(rename = "ACCOUNT_EXISTS")]
    AccountExists,
    #[serde(rename = "ACCOUNT_DOES_NOT_EXIST")]
    AccountDoesNotExist,
    #[serde(rename = "VERIFY_EMAIL_STILL_VALID")]
    VerifyEmailStillValid,
    #[serde(rename = "LAST_VERIFICATION_CODE_VALID")]
    LastVerificationCodeValid,
    #[serde(rename = "VERIFICATION_CODE_EXPIRED")]
    VerificationCodeExpired,
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,
}

impl MessageCode {
    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCode::Success => "SUCCESS",
            MessageCode::Failed => "FAILED",
            MessageCode::Forbidden => "Forbidden",
            MessageCode::AccountExists => "ACCOUNT_EXISTS",
            MessageCode::AccountDoesNotExist => "ACCOUNT_DOES_NOT_EXIST",
            MessageCode::VerifyEmailStillValid => "VERIFY_EMAIL_STILL_VALID",
            MessageCode::LastVerificationCodeValid => "LAST_VERIFICATION_CODE_VALID",
            MessageCode::VerificationCodeExpired => "VERIFICATION_CODE_EXPIRED",
            MessageCode::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope: `{"code": <MessageCode>, "data": <T|null>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpBody<T> {
    /// Outcome code
    pub code: MessageCode,

    /// Payload, `null` when absent
    pub data: Option<T>,
}

impl<T> HttpBody<T> {
    /// Create an envelope
    pub fn build(code: MessageCode, data: Option<T>) -> Self {
        Self { code, data }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Database status, `null` when the server runs without a pool
    pub database: Option<ComponentHealth>,
}

/// Health of a single backing component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// `up` or `down`
    pub status: String,

    /// Free-form detail such as pool usage or the failure reason
    pub detail: Option<String>,
}

impl ComponentHealth {
    pub fn up(detail: impl Into<String>) -> Self {
        Self {
            status: "up".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn down(detail: impl Into<String>) -> Self {
        Self {
            status: "down".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == "up"
    }
}
