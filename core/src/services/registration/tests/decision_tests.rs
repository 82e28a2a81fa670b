//! Tests for the pure registration decisions

use ra_shared::types::MessageCode;

use crate::domain::entities::{Account, AccountStatus, IssuedCode};
use crate::domain::value_objects::{messages, RegistrationOutcome};
use crate::services::registration::{
    decide_progress_check, decide_progress_code_request, decide_registration_or_resend,
    ProgressCodeDecision, RegistrationDecision,
};

use super::mocks::{account_with_progress_code, account_with_registration_code, at};

const IN_REVIEW_STATES: [AccountStatus; 4] = [
    AccountStatus::BasicInfoSubmitted,
    AccountStatus::AssistantReviewed,
    AccountStatus::StaffReviewed,
    AccountStatus::ManagerReviewed,
];

#[test]
fn test_unknown_email_initiates() {
    assert_eq!(
        decide_registration_or_resend(None, at(0)),
        RegistrationDecision::Initiate
    );
}

#[test]
fn test_new_registration_initiates() {
    let account = Account::new("a@x.com", at(0));
    assert_eq!(
        decide_registration_or_resend(Some(&account), at(0)),
        RegistrationDecision::Initiate
    );
}

#[test]
fn test_active_code_suppresses_resend() {
    let account =
        account_with_registration_code("a@x.com", AccountStatus::EmailVerified, "c", 600);

    for now in [0, 1, 599] {
        assert_eq!(
            decide_registration_or_resend(Some(&account), at(now)),
            RegistrationDecision::Reject(RegistrationOutcome::forbidden(
                messages::RESEND_SUPPRESSED
            ))
        );
    }
}

#[test]
fn test_expired_code_rotates() {
    let account =
        account_with_registration_code("a@x.com", AccountStatus::EmailVerified, "c", 600);

    // Expiry instant itself counts as expired
    for now in [600, 601, 10_000] {
        assert_eq!(
            decide_registration_or_resend(Some(&account), at(now)),
            RegistrationDecision::Rotate
        );
    }
}

#[test]
fn test_verified_without_code_rotates() {
    let mut account = Account::new("a@x.com", at(0));
    account.status = AccountStatus::EmailVerified;

    assert_eq!(
        decide_registration_or_resend(Some(&account), at(0)),
        RegistrationDecision::Rotate
    );
}

#[test]
fn test_in_review_rejected_regardless_of_code() {
    for status in IN_REVIEW_STATES {
        // An active code must not bypass the in-review guard
        let account = account_with_registration_code("a@x.com", status, "c", 600);

        for now in [0, 700] {
            assert_eq!(
                decide_registration_or_resend(Some(&account), at(now)),
                RegistrationDecision::Reject(RegistrationOutcome::rejected_with(
                    MessageCode::AccountExists,
                    messages::IN_REVIEW
                )),
                "status {:?} at {}",
                status,
                now
            );
        }
    }
}

#[test]
fn test_side_and_unrecognized_states_escalate() {
    for status in [
        AccountStatus::Suspended,
        AccountStatus::Banned,
        AccountStatus::Unrecognized(99),
        AccountStatus::Unrecognized(-7),
    ] {
        let mut account = Account::new("a@x.com", at(0));
        account.status = status;

        assert_eq!(
            decide_registration_or_resend(Some(&account), at(0)),
            RegistrationDecision::Reject(RegistrationOutcome::failed(messages::ESCALATE)),
            "status {:?}",
            status
        );
    }
}

#[test]
fn test_progress_request_without_account() {
    assert_eq!(
        decide_progress_code_request(None, at(0)),
        ProgressCodeDecision::Reject(RegistrationOutcome::rejected(
            MessageCode::AccountDoesNotExist
        ))
    );
}

#[test]
fn test_progress_request_with_active_code() {
    let account = account_with_progress_code("a@x.com", AccountStatus::EmailVerified, "p", 600);

    assert_eq!(
        decide_progress_code_request(Some(&account), at(599)),
        ProgressCodeDecision::Reject(RegistrationOutcome::rejected(
            MessageCode::LastVerificationCodeValid
        ))
    );
}

#[test]
fn test_progress_request_issues_when_missing_or_expired() {
    let fresh = Account::new("a@x.com", at(0));
    assert_eq!(
        decide_progress_code_request(Some(&fresh), at(0)),
        ProgressCodeDecision::Issue
    );

    let expired = account_with_progress_code("a@x.com", AccountStatus::EmailVerified, "p", 600);
    assert_eq!(
        decide_progress_code_request(Some(&expired), at(600)),
        ProgressCodeDecision::Issue
    );
}

#[test]
fn test_progress_check_unknown_code() {
    assert_eq!(
        decide_progress_check(None, "nope", at(0)),
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
}

#[test]
fn test_progress_check_describes_every_declared_status() {
    let expected = [
        (AccountStatus::NewRegistration, "New registration"),
        (AccountStatus::EmailVerified, "Email verified"),
        (AccountStatus::BasicInfoSubmitted, "Basic information submitted"),
        (AccountStatus::AssistantReviewed, "Reviewed by assistant"),
        (AccountStatus::StaffReviewed, "Reviewed by staff"),
        (AccountStatus::ManagerReviewed, "Reviewed by manager"),
        (AccountStatus::Suspended, "Account suspended"),
        (AccountStatus::Banned, "Account banned"),
    ];

    for (status, description) in expected {
        let account = account_with_progress_code("a@x.com", status, "p", 600);
        assert_eq!(
            decide_progress_check(Some(&account), "p", at(0)),
            RegistrationOutcome::success_with(description)
        );
    }
}

#[test]
fn test_progress_check_still_answers_after_code_expiry() {
    let account = account_with_progress_code("a@x.com", AccountStatus::StaffReviewed, "p", 600);
    assert_eq!(
        decide_progress_check(Some(&account), "p", at(5_000)),
        RegistrationOutcome::success_with("Reviewed by staff")
    );
}

#[test]
fn test_progress_check_unrecognized_status_fails() {
    let account = account_with_progress_code("a@x.com", AccountStatus::Unrecognized(70), "p", 600);
    let outcome = decide_progress_check(Some(&account), "p", at(0));

    assert_eq!(outcome, RegistrationOutcome::failed_silently());
    assert_eq!(outcome.message_code(), MessageCode::Failed);
    assert!(outcome.data().is_none());
}

#[test]
fn test_progress_check_superseded_code_while_current_active() {
    let account = account_with_progress_code("a@x.com", AccountStatus::EmailVerified, "p-2", 600);
    assert_eq!(
        decide_progress_check(Some(&account), "p-1", at(100)),
        RegistrationOutcome::rejected(MessageCode::VerifyEmailStillValid)
    );
}

#[test]
fn test_progress_check_superseded_code_after_current_expired() {
    let account = account_with_progress_code("a@x.com", AccountStatus::EmailVerified, "p-2", 600);
    assert_eq!(
        decide_progress_check(Some(&account), "p-1", at(600)),
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
}

#[test]
fn test_progress_check_cleared_slot() {
    let mut account = Account::new("a@x.com", at(0));
    account.registration_code = Some(IssuedCode::new("r", at(600)));
    assert_eq!(
        decide_progress_check(Some(&account), "p", at(0)),
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
}
