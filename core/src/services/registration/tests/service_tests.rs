//! Tests for the registration service against in-memory collaborators

use chrono::Duration;
use ra_shared::types::MessageCode;

use crate::domain::entities::AccountStatus;
use crate::domain::value_objects::{messages, RegistrationOutcome};
use crate::errors::DomainError;

use super::mocks::{
    account_with_progress_code, account_with_registration_code, at, email_config, Fixture,
};

#[tokio::test]
async fn test_first_registration_creates_account_and_sends_code() {
    let fixture = Fixture::new();

    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::success());

    let account = fixture.accounts.get("a@x.com").await.unwrap();
    assert_eq!(account.status, AccountStatus::EmailVerified);
    let code = account.registration_code.unwrap();
    assert_eq!(code.code, "code-1");
    assert_eq!(code.expires_at, at(600));
    assert!(account.progress_code.is_none());

    let sent = fixture.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "a@x.com");
    assert_eq!(sent[0].code, "code-1");
    assert_eq!(sent[0].template_key, "register_user");
    assert_eq!(sent[0].redirect_url, "http://localhost:3000/register/profile");
}

#[tokio::test]
async fn test_email_is_normalised() {
    let fixture = Fixture::new();

    fixture
        .service
        .register_or_resend("  A@X.com ")
        .await
        .unwrap();

    assert!(fixture.accounts.get("a@x.com").await.is_some());
    assert_eq!(fixture.notifier.last().await.unwrap().recipient, "a@x.com");
}

#[tokio::test]
async fn test_create_with_failed_notification_keeps_code() {
    let fixture = Fixture::new();
    fixture.notifier.set_failing(true);

    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::failed(messages::ISSUE_ON_CREATE_FAILED)
    );

    let account = fixture.accounts.get("a@x.com").await.unwrap();
    assert_eq!(account.registration_code.unwrap().code, "code-1");
    assert_eq!(fixture.notifier.sent_count().await, 1);
}

#[tokio::test]
async fn test_register_resend_timeline() {
    let fixture = Fixture::new();

    // t=0: first registration
    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert!(outcome.is_success());
    let account = fixture.accounts.get("a@x.com").await.unwrap();
    assert_eq!(account.registration_code.unwrap().expires_at, at(600));

    // t=300: code still active
    fixture.set_time(300);
    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome.message_code(), MessageCode::Forbidden);
    assert_eq!(outcome.data(), Some(messages::RESEND_SUPPRESSED));
    let account = fixture.accounts.get("a@x.com").await.unwrap();
    assert_eq!(account.registration_code.unwrap().expires_at, at(600));
    assert_eq!(fixture.notifier.sent_count().await, 1);

    // t=700: expired, rotated and resent
    fixture.set_time(700);
    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::success());
    let account = fixture.accounts.get("a@x.com").await.unwrap();
    let code = account.registration_code.unwrap();
    assert_eq!(code.expires_at, at(1300));
    assert_eq!(code.code, "code-2");
    assert_eq!(fixture.notifier.sent_count().await, 2);

    // immediately after: suppressed again
    fixture.clock.advance(Duration::seconds(1));
    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome.message_code(), MessageCode::Forbidden);
}

#[tokio::test]
async fn test_rotation_with_failed_notification() {
    let fixture = Fixture::new();
    fixture
        .accounts
        .insert(account_with_registration_code(
            "a@x.com",
            AccountStatus::EmailVerified,
            "old",
            600,
        ))
        .await;
    fixture.notifier.set_failing(true);
    fixture.set_time(900);

    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::failed(messages::RESEND_FAILED));

    let account = fixture.accounts.get("a@x.com").await.unwrap();
    let code = account.registration_code.unwrap();
    assert_eq!(code.code, "code-1");
    assert_eq!(code.expires_at, at(1500));
}

#[tokio::test]
async fn test_in_review_account_untouched() {
    let fixture = Fixture::new();
    let stored =
        account_with_registration_code("a@x.com", AccountStatus::BasicInfoSubmitted, "old", 600);
    fixture.accounts.insert(stored.clone()).await;

    for now in [0, 300, 10_000] {
        fixture.set_time(now);
        let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
        assert_eq!(outcome.message_code(), MessageCode::AccountExists);
        assert_eq!(outcome.data(), Some(messages::IN_REVIEW));
    }

    assert_eq!(fixture.accounts.get("a@x.com").await.unwrap(), stored);
    assert_eq!(fixture.accounts.write_count(), 0);
    assert_eq!(fixture.notifier.sent_count().await, 0);
}

#[tokio::test]
async fn test_suspended_account_escalates() {
    let fixture = Fixture::new();
    fixture
        .accounts
        .insert(account_with_registration_code(
            "a@x.com",
            AccountStatus::Suspended,
            "old",
            600,
        ))
        .await;

    let outcome = fixture.service.register_or_resend("a@x.com").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::failed(messages::ESCALATE));
    assert_eq!(fixture.notifier.sent_count().await, 0);
}

#[tokio::test]
async fn test_invalid_ttl_is_configuration_error() {
    let fixture = Fixture::with_config(email_config(0));

    let result = fixture.service.register_or_resend("a@x.com").await;
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
    assert!(fixture.accounts.get("a@x.com").await.is_none());
    assert_eq!(fixture.issuer.issued(), 0);
    assert_eq!(fixture.notifier.sent_count().await, 0);
}

#[tokio::test]
async fn test_settings_are_read_per_call() {
    let fixture = Fixture::new();
    fixture.service.register_or_resend("a@x.com").await.unwrap();

    fixture.settings.replace(email_config(60)).await;
    fixture.set_time(600);
    fixture.service.register_or_resend("a@x.com").await.unwrap();

    let account = fixture.accounts.get("a@x.com").await.unwrap();
    assert_eq!(account.registration_code.unwrap().expires_at, at(660));
}

#[tokio::test]
async fn test_progress_code_request_unknown_email() {
    let fixture = Fixture::new();

    let outcome = fixture
        .service
        .request_progress_code("nobody@x.com")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
    assert_eq!(fixture.notifier.sent_count().await, 0);
}

#[tokio::test]
async fn test_progress_code_request_lifecycle() {
    let fixture = Fixture::new();
    fixture.service.register_or_resend("a@x.com").await.unwrap();

    let outcome = fixture.service.request_progress_code("a@x.com").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::success());

    let account = fixture.accounts.get("a@x.com").await.unwrap();
    let progress = account.progress_code.unwrap();
    assert_eq!(progress.code, "code-2");
    assert_eq!(progress.expires_at, at(600));
    // Registration code is independent of the progress code
    assert_eq!(account.registration_code.unwrap().code, "code-1");

    let last = fixture.notifier.last().await.unwrap();
    assert_eq!(last.code, "code-2");
    assert_eq!(last.template_key, "registration_progress");
    assert_eq!(last.redirect_url, "http://localhost:3000/register/progress");

    // second request before expiry
    fixture.set_time(599);
    let outcome = fixture.service.request_progress_code("a@x.com").await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::rejected(MessageCode::LastVerificationCodeValid)
    );
    assert_eq!(fixture.notifier.sent_count().await, 2);

    // after expiry it rotates and resends
    fixture.set_time(600);
    let outcome = fixture.service.request_progress_code("a@x.com").await.unwrap();
    assert!(outcome.is_success());
    let progress = fixture
        .accounts
        .get("a@x.com")
        .await
        .unwrap()
        .progress_code
        .unwrap();
    assert_eq!(progress.code, "code-3");
    assert_eq!(progress.expires_at, at(1200));
}

#[tokio::test]
async fn test_progress_code_request_failed_notification() {
    let fixture = Fixture::new();
    fixture.service.register_or_resend("a@x.com").await.unwrap();
    fixture.notifier.set_failing(true);

    let outcome = fixture.service.request_progress_code("a@x.com").await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::failed(messages::PROGRESS_SEND_FAILED)
    );
    assert!(fixture
        .accounts
        .get("a@x.com")
        .await
        .unwrap()
        .progress_code
        .is_some());
}

#[tokio::test]
async fn test_check_progress_with_issued_code() {
    let fixture = Fixture::new();
    fixture.service.register_or_resend("a@x.com").await.unwrap();
    fixture.service.request_progress_code("a@x.com").await.unwrap();

    let outcome = fixture.service.check_progress("code-2").await.unwrap();
    assert_eq!(outcome, RegistrationOutcome::success_with("Email verified"));

    // the registration code is not a progress code
    let outcome = fixture.service.check_progress("code-1").await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
}

#[tokio::test]
async fn test_check_progress_superseded_code() {
    let fixture = Fixture::new();
    fixture.service.register_or_resend("a@x.com").await.unwrap();
    fixture.service.request_progress_code("a@x.com").await.unwrap();

    fixture.set_time(600);
    fixture.service.request_progress_code("a@x.com").await.unwrap();

    // the store no longer resolves the first progress code
    let outcome = fixture.service.check_progress("code-2").await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)
    );
    let outcome = fixture.service.check_progress("code-3").await.unwrap();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_check_progress_unrecognized_status() {
    let fixture = Fixture::new();
    fixture
        .accounts
        .insert(account_with_progress_code(
            "a@x.com",
            AccountStatus::Unrecognized(15),
            "p",
            600,
        ))
        .await;

    let outcome = fixture.service.check_progress_at("p", at(0)).await.unwrap();
    assert_eq!(outcome.message_code(), MessageCode::Failed);
    assert!(outcome.data().is_none());
}
