//! Account aggregate for email self-registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

use super::account_status::AccountStatus;
use super::issued_code::IssuedCode;

/// A self-registered account keyed by email
///
/// The registration code and the progress code live independently: a leaked
/// progress code cannot be replayed to advance registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalised email address, immutable after creation
    pub email: String,

    /// Current registration status
    pub status: AccountStatus,

    /// Code proving control of the email for the registration step
    pub registration_code: Option<IssuedCode>,

    /// Code authorizing registration progress inquiries
    pub progress_code: Option<IssuedCode>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Optimistic concurrency version, bumped by the store on every update
    pub version: u64,
}

impl Account {
    /// Creates a new account at `NewRegistration` with no codes
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            status: AccountStatus::NewRegistration,
            registration_code: None,
            progress_code: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Replace the registration code; the previous one is overwritten
    pub fn assign_registration_code(&mut self, code: IssuedCode, now: DateTime<Utc>) {
        self.registration_code = Some(code);
        self.updated_at = now;
    }

    /// Replace the progress code; the previous one is overwritten
    pub fn assign_progress_code(&mut self, code: IssuedCode, now: DateTime<Utc>) {
        self.progress_code = Some(code);
        self.updated_at = now;
    }

    /// Clear the registration code once it has been used
    pub fn consume_registration_code(&mut self, now: DateTime<Utc>) {
        self.registration_code = None;
        self.updated_at = now;
    }

    /// Whether the registration code exists and is active at `now`
    pub fn registration_code_active_at(&self, now: DateTime<Utc>) -> bool {
        self.registration_code
            .as_ref()
            .is_some_and(|code| code.is_active_at(now))
    }

    /// Whether the progress code exists and is active at `now`
    pub fn progress_code_active_at(&self, now: DateTime<Utc>) -> bool {
        self.progress_code
            .as_ref()
            .is_some_and(|code| code.is_active_at(now))
    }

    /// Move the account forward to `target`
    ///
    /// # Errors
    ///
    /// `DomainError::BusinessRule` when the transition would not move forward
    pub fn advance_status(&mut self, target: AccountStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.status.can_advance_to(target) {
            return Err(DomainError::BusinessRule {
                message: format!(
                    "Cannot move account status from {} to {}",
                    self.status.code(),
                    target.code()
                ),
            });
        }
        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}
