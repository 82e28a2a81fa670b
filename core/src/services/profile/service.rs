//! Profile submission service

use chrono::{DateTime, Utc};
use ra_shared::types::MessageCode;
use ra_shared::utils::email::mask_email;
use std::sync::Arc;

use crate::domain::entities::{Account, AccountStatus, ClientProfile, ProfileSubmission};
use crate::domain::value_objects::RegistrationOutcome;
use crate::errors::DomainResult;
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::clock::{Clock, SystemClock};

/// Accepts the profile of an account whose email has been verified
///
/// A successful submission consumes the registration code and moves the
/// account to `BasicInfoSubmitted`.
pub struct ProfileService<A, P>
where
    A: AccountRepository,
    P: ProfileRepository,
{
    account_repository: Arc<A>,
    profile_repository: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<A, P> ProfileService<A, P>
where
    A: AccountRepository,
    P: ProfileRepository,
{
    pub fn new(account_repository: Arc<A>, profile_repository: Arc<P>) -> Self {
        Self {
            account_repository,
            profile_repository,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Submit a profile using the registration code sent by email
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Success or a client-correctable rejection
    /// * `Err(DomainError)` - Store failure, including a version `Conflict`
    pub async fn submit_profile(
        &self,
        registration_code: &str,
        submission: ProfileSubmission,
    ) -> DomainResult<RegistrationOutcome> {
        let now = self.clock.now();
        self.submit_profile_at(registration_code, submission, now).await
    }

    /// `submit_profile` evaluated at an explicit instant
    pub async fn submit_profile_at(
        &self,
        registration_code: &str,
        submission: ProfileSubmission,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationOutcome> {
        let account = match self
            .account_repository
            .find_by_registration_code(registration_code)
            .await?
        {
            Some(account) => account,
            None => return Ok(RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)),
        };

        // the store lookup may be looser than an exact byte match
        let exact = account
            .registration_code
            .as_ref()
            .is_some_and(|issued| issued.matches(registration_code));
        if !exact {
            return Ok(RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist));
        }

        if account.status != AccountStatus::EmailVerified {
            return Ok(RegistrationOutcome::rejected(MessageCode::AccountExists));
        }

        if !account.registration_code_active_at(now) {
            return Ok(RegistrationOutcome::rejected(MessageCode::VerificationCodeExpired));
        }

        if submission.full_name.trim().is_empty() {
            return Ok(RegistrationOutcome::rejected_with(
                MessageCode::ValidationError,
                "Full name cannot be blank",
            ));
        }

        // The versioned account update decides which submission wins; the
        // profile is only written once it has.
        let snapshot = account.clone();
        let mut account = account;
        account.consume_registration_code(now);
        account.advance_status(AccountStatus::BasicInfoSubmitted, now)?;
        let stored = self.account_repository.update(account).await?;

        let profile = ClientProfile::from_submission(stored.id, submission, now);
        if let Err(e) = self.profile_repository.save(profile).await {
            self.restore_account(snapshot, &stored, now).await;
            return Err(e);
        }

        tracing::info!(
            email = %mask_email(&stored.email),
            account_id = %stored.id,
            event = "profile_submitted",
            "Profile submitted, account awaiting review"
        );

        Ok(RegistrationOutcome::success())
    }

    /// Put the account back to its pre-submission state after a failed
    /// profile write, so the registration code can be used again
    async fn restore_account(&self, snapshot: Account, stored: &Account, now: DateTime<Utc>) {
        let restored = Account {
            version: stored.version,
            updated_at: now,
            ..snapshot
        };

        if let Err(e) = self.account_repository.update(restored).await {
            tracing::error!(
                account_id = %stored.id,
                error = %e,
                event = "profile_rollback_failed",
                "Profile save failed and the account could not be restored"
            );
        }
    }
}
