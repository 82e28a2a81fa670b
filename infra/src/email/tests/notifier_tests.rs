//! Tests for the email notifiers

use ra_core::services::{NotificationRequest, Notifier};
use ra_shared::config::{EmailConfig, EmailProvider};

use crate::email::{create_notifier, HttpEmailConfig, HttpEmailNotifier, LoggingEmailNotifier};
use crate::InfrastructureError;

fn request() -> NotificationRequest {
    NotificationRequest {
        template_key: "register_user".to_string(),
        recipient: "a@x.com".to_string(),
        code: "3f6c2a".to_string(),
        sender: "no-reply@regauth.local".to_string(),
        redirect_url: "http://localhost:3000/register/profile".to_string(),
    }
}

#[tokio::test]
async fn test_logging_notifier_always_delivers() {
    let notifier = LoggingEmailNotifier::new();

    assert!(notifier.send(&request()).await);
    assert!(notifier.send(&request()).await);
    assert_eq!(notifier.get_message_count(), 2);
}

#[tokio::test]
async fn test_http_notifier_reports_unreachable_relay() {
    let notifier = HttpEmailNotifier::new(HttpEmailConfig {
        // Nothing listens on the discard port
        relay_url: "http://127.0.0.1:9/send".to_string(),
        request_timeout_secs: 2,
    })
    .unwrap();

    assert!(!notifier.send(&request()).await);
}

#[test]
fn test_http_config_requires_relay_url() {
    let config = EmailConfig {
        provider: EmailProvider::Http,
        relay_url: None,
        ..EmailConfig::default()
    };

    assert!(matches!(
        HttpEmailConfig::from_email_config(&config),
        Err(InfrastructureError::Config(_))
    ));
    assert!(create_notifier(&config).is_err());
}

#[test]
fn test_http_config_rejects_non_http_url() {
    let config = EmailConfig {
        provider: EmailProvider::Http,
        relay_url: Some("smtp://mail.example.com".to_string()),
        ..EmailConfig::default()
    };

    assert!(matches!(
        HttpEmailConfig::from_email_config(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[tokio::test]
async fn test_create_notifier_selects_provider() {
    let notifier = create_notifier(&EmailConfig::default()).unwrap();
    assert!(notifier.send(&request()).await);

    let config = EmailConfig {
        provider: EmailProvider::Http,
        relay_url: Some("https://relay.example.com/send".to_string()),
        relay_timeout_secs: 5,
        ..EmailConfig::default()
    };
    assert!(create_notifier(&config).is_ok());
}
