//! Registration service: runs the pure decisions against the store and notifier

use chrono::{DateTime, Utc};
use ra_shared::types::MessageCode;
use ra_shared::utils::email::{mask_email, normalize_email};
use std::sync::Arc;

use crate::domain::entities::{Account, AccountStatus};
use crate::domain::value_objects::{messages, RegistrationOutcome};
use crate::errors::DomainResult;
use crate::repositories::AccountRepository;
use crate::services::clock::{Clock, SystemClock};
use crate::services::verification::{
    AssociatedApi, EmailSettings, NotificationRequest, Notifier, SettingsProvider,
    UuidCodeIssuer, VerificationCodeIssuer,
};

use super::decision::{
    decide_progress_check, decide_progress_code_request, decide_registration_or_resend,
    ProgressCodeDecision, RegistrationDecision,
};

/// Email self-registration state machine
///
/// Stateless itself: every call reads the account and the email settings
/// fresh. Any account mutation is persisted before the notification is
/// attempted, so a failed send leaves the new code stored.
pub struct RegistrationService<A, N, S>
where
    A: AccountRepository,
    N: Notifier,
    S: SettingsProvider,
{
    /// Account repository for persistence
    account_repository: Arc<A>,
    /// Email delivery
    notifier: Arc<N>,
    /// Email settings collaborator
    settings: Arc<S>,
    /// Verification code generation
    issuer: Arc<dyn VerificationCodeIssuer>,
    /// Source of "now"
    clock: Arc<dyn Clock>,
}

impl<A, N, S> RegistrationService<A, N, S>
where
    A: AccountRepository,
    N: Notifier,
    S: SettingsProvider,
{
    /// Create a registration service using UUID codes and the system clock
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account persistence
    /// * `notifier` - Email delivery
    /// * `settings` - Settings collaborator consulted on every call
    pub fn new(account_repository: Arc<A>, notifier: Arc<N>, settings: Arc<S>) -> Self {
        Self {
            account_repository,
            notifier,
            settings,
            issuer: Arc::new(UuidCodeIssuer::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the code issuer
    pub fn with_issuer(mut self, issuer: Arc<dyn VerificationCodeIssuer>) -> Self {
        self.issuer = issuer;
        self
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a new email or resend its verification code
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Success, rejection, or notification failure
    /// * `Err(DomainError)` - Store, settings or code issuance failure
    pub async fn register_or_resend(&self, email: &str) -> DomainResult<RegistrationOutcome> {
        let email = normalize_email(email);
        let account = self.account_repository.find_by_email(&email).await?;
        let now = self.clock.now();

        self.decide_registration_or_resend(&email, account, now).await
    }

    /// Execute the register-or-resend decision for an already loaded account
    pub async fn decide_registration_or_resend(
        &self,
        email: &str,
        account: Option<Account>,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationOutcome> {
        let decision = decide_registration_or_resend(account.as_ref(), now);

        match decision {
            RegistrationDecision::Reject(outcome) => {
                tracing::info!(
                    email = %mask_email(email),
                    code = %outcome.message_code(),
                    event = "registration_rejected",
                    "Registration request rejected"
                );
                Ok(outcome)
            }
            RegistrationDecision::Initiate => self.initiate(email, account, now).await,
            RegistrationDecision::Rotate => match account {
                Some(account) => self.rotate(account, now).await,
                None => self.initiate(email, None, now).await,
            },
        }
    }

    async fn initiate(
        &self,
        email: &str,
        existing: Option<Account>,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationOutcome> {
        let settings = self.settings.email_settings(AssociatedApi::RegisterUser).await?;
        let code = self.issuer.issue(settings.ttl_seconds, now)?;

        let stored = match existing {
            Some(mut account) => {
                account.assign_registration_code(code, now);
                account.advance_status(AccountStatus::EmailVerified, now)?;
                self.account_repository.update(account).await?
            }
            None => {
                let mut account = Account::new(email, now);
                account.assign_registration_code(code, now);
                account.advance_status(AccountStatus::EmailVerified, now)?;
                self.account_repository.create(account).await?
            }
        };

        tracing::info!(
            email = %mask_email(&stored.email),
            account_id = %stored.id,
            event = "registration_code_issued",
            "Registration code issued for new account"
        );

        let delivered = self
            .notify_registration_code(&settings, &stored)
            .await;
        Ok(RegistrationOutcome::from_delivery(
            delivered,
            messages::ISSUE_ON_CREATE_FAILED,
        ))
    }

    async fn rotate(&self, mut account: Account, now: DateTime<Utc>) -> DomainResult<RegistrationOutcome> {
        let settings = self.settings.email_settings(AssociatedApi::RegisterUser).await?;
        let code = self.issuer.issue(settings.ttl_seconds, now)?;

        account.assign_registration_code(code, now);
        let stored = self.account_repository.update(account).await?;

        tracing::info!(
            email = %mask_email(&stored.email),
            account_id = %stored.id,
            event = "registration_code_rotated",
            "Expired registration code replaced"
        );

        let delivered = self
            .notify_registration_code(&settings, &stored)
            .await;
        Ok(RegistrationOutcome::from_delivery(
            delivered,
            messages::RESEND_FAILED,
        ))
    }

    /// Email a progress-inquiry code to a registered address
    pub async fn request_progress_code(&self, email: &str) -> DomainResult<RegistrationOutcome> {
        let email = normalize_email(email);
        let account = self.account_repository.find_by_email(&email).await?;
        let now = self.clock.now();

        self.decide_progress_code_request(account, now).await
    }

    /// Execute the progress-code decision for an already loaded account
    pub async fn decide_progress_code_request(
        &self,
        account: Option<Account>,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationOutcome> {
        let decision = decide_progress_code_request(account.as_ref(), now);

        let mut account = match (decision, account) {
            (ProgressCodeDecision::Issue, Some(account)) => account,
            (ProgressCodeDecision::Reject(outcome), _) => return Ok(outcome),
            (ProgressCodeDecision::Issue, None) => {
                return Ok(RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist))
            }
        };

        let settings = self
            .settings
            .email_settings(AssociatedApi::RegistrationProgress)
            .await?;
        let code = self.issuer.issue(settings.ttl_seconds, now)?;

        account.assign_progress_code(code, now);
        let stored = self.account_repository.update(account).await?;

        tracing::info!(
            email = %mask_email(&stored.email),
            account_id = %stored.id,
            event = "progress_code_issued",
            "Registration progress code issued"
        );

        let delivered = match stored.progress_code.as_ref() {
            Some(issued) => self.notify(&settings, &stored.email, &issued.code).await,
            None => false,
        };
        Ok(RegistrationOutcome::from_delivery(
            delivered,
            messages::PROGRESS_SEND_FAILED,
        ))
    }

    /// Describe the registration stage of the account owning `code`
    pub async fn check_progress(&self, code: &str) -> DomainResult<RegistrationOutcome> {
        let now = self.clock.now();
        self.check_progress_at(code, now).await
    }

    /// `check_progress` evaluated at an explicit instant
    pub async fn check_progress_at(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationOutcome> {
        let account = self.account_repository.find_by_progress_code(code).await?;
        let outcome = decide_progress_check(account.as_ref(), code, now);

        if let (Some(account), RegistrationOutcome::Failed { .. }) = (account.as_ref(), &outcome) {
            tracing::error!(
                account_id = %account.id,
                status = account.status.code(),
                event = "unrecognized_status",
                "Account carries a status outside the declared set"
            );
        }

        Ok(outcome)
    }

    async fn notify_registration_code(&self, settings: &EmailSettings, account: &Account) -> bool {
        match account.registration_code.as_ref() {
            Some(issued) => self.notify(settings, &account.email, &issued.code).await,
            None => false,
        }
    }

    async fn notify(&self, settings: &EmailSettings, email: &str, code: &str) -> bool {
        let request = NotificationRequest::new(settings, email, code);
        let delivered = self.notifier.send(&request).await;

        if !delivered {
            tracing::warn!(
                email = %mask_email(email),
                template = %settings.template_key,
                event = "notification_failed",
                "Verification email was not delivered"
            );
        }

        delivered
    }
}
