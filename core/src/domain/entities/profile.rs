//! Client profile submitted after the email has been verified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile fields supplied by the registrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Stored profile, one per account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Owning account
    pub account_id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    /// Timestamp of the (latest) submission
    pub submitted_at: DateTime<Utc>,
}

impl ClientProfile {
    /// Build a profile for an account from a submission
    pub fn from_submission(
        account_id: Uuid,
        submission: ProfileSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id,
            full_name: submission.full_name.trim().to_string(),
            phone: submission.phone,
            company: submission.company,
            address: submission.address,
            submitted_at,
        }
    }
}
