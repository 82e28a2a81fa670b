//! A verification code together with its expiry instant.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// An opaque verification code and the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCode {
    /// Opaque token sent to the account's email address
    pub code: String,

    /// Instant after which the code is invalid and may be regenerated
    pub expires_at: DateTime<Utc>,
}

impl IssuedCode {
    /// Create an issued code
    pub fn new(code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            expires_at,
        }
    }

    /// A code is active strictly before its expiry instant
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Compare a candidate against this code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        if self.code.len() != candidate.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
