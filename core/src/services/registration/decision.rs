//! Pure decisions for the registration entry points.
//!
//! Each function looks only at the account snapshot and the current
//! instant. Branches are evaluated top to bottom and the first match wins;
//! the `EmailVerified` arms must stay ahead of the in-review guard.

use chrono::{DateTime, Utc};
use ra_shared::types::MessageCode;

use crate::domain::entities::{Account, AccountStatus};
use crate::domain::value_objects::{messages, RegistrationOutcome};

/// What to do with a register-or-resend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDecision {
    /// No code has been issued yet: create the account and send the first code
    Initiate,
    /// The registration code is gone or expired: issue a fresh one and resend
    Rotate,
    /// Answer without touching the account or sending anything
    Reject(RegistrationOutcome),
}

/// What to do with a request for a progress-inquiry code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressCodeDecision {
    /// Issue a fresh progress code and send it
    Issue,
    /// Answer without touching the account or sending anything
    Reject(RegistrationOutcome),
}

/// Decide how to answer "register or resend verification"
pub fn decide_registration_or_resend(
    account: Option<&Account>,
    now: DateTime<Utc>,
) -> RegistrationDecision {
    let account = match account {
        Some(account) => account,
        None => return RegistrationDecision::Initiate,
    };

    match account.status {
        AccountStatus::NewRegistration => RegistrationDecision::Initiate,
        AccountStatus::EmailVerified if account.registration_code_active_at(now) => {
            RegistrationDecision::Reject(RegistrationOutcome::forbidden(
                messages::RESEND_SUPPRESSED,
            ))
        }
        AccountStatus::EmailVerified => RegistrationDecision::Rotate,
        status if status.is_at_least(AccountStatus::BasicInfoSubmitted) => {
            RegistrationDecision::Reject(RegistrationOutcome::rejected_with(
                MessageCode::AccountExists,
                messages::IN_REVIEW,
            ))
        }
        _ => RegistrationDecision::Reject(RegistrationOutcome::failed(messages::ESCALATE)),
    }
}

/// Decide how to answer "email me a progress-check code"
pub fn decide_progress_code_request(
    account: Option<&Account>,
    now: DateTime<Utc>,
) -> ProgressCodeDecision {
    match account {
        None => ProgressCodeDecision::Reject(RegistrationOutcome::rejected(
            MessageCode::AccountDoesNotExist,
        )),
        Some(account) if account.progress_code_active_at(now) => ProgressCodeDecision::Reject(
            RegistrationOutcome::rejected(MessageCode::LastVerificationCodeValid),
        ),
        Some(_) => ProgressCodeDecision::Issue,
    }
}

/// Answer "what's my status" for the account resolved from `code`
///
/// The account's current progress slot must still hold `code`. A cleared or
/// superseded code is refused with `VERIFY_EMAIL_STILL_VALID` while the
/// account's current progress code is active, and treated as unknown after.
pub fn decide_progress_check(
    account: Option<&Account>,
    code: &str,
    now: DateTime<Utc>,
) -> RegistrationOutcome {
    let account = match account {
        Some(account) => account,
        None => return RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist),
    };

    let current = account
        .progress_code
        .as_ref()
        .is_some_and(|issued| issued.matches(code));

    if !current {
        return if account.progress_code_active_at(now) {
            RegistrationOutcome::rejected(MessageCode::VerifyEmailStillValid)
        } else {
            RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
        };
    }

    match account.status.description() {
        Some(description) => RegistrationOutcome::success_with(description),
        None => RegistrationOutcome::failed_silently(),
    }
}
