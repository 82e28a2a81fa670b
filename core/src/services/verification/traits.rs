//! Traits for code issuance, settings lookup and notification delivery

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::IssuedCode;
use crate::errors::DomainResult;

use super::types::{AssociatedApi, EmailSettings, NotificationRequest};

/// Generates verification codes and their expiry instants
pub trait VerificationCodeIssuer: Send + Sync {
    /// Issue a fresh code expiring `ttl_seconds` after `now`
    ///
    /// # Errors
    ///
    /// `DomainError::Configuration` when the TTL is not positive or out of range
    fn issue(&self, ttl_seconds: i64, now: DateTime<Utc>) -> DomainResult<IssuedCode>;
}

/// Trait for email delivery integration
///
/// Any `false` is a transport failure; callers do not retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, request: &NotificationRequest) -> bool;
}

/// Trait for the settings collaborator, consulted on every call
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn email_settings(&self, api: AssociatedApi) -> DomainResult<EmailSettings>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    async fn send(&self, request: &NotificationRequest) -> bool {
        (**self).send(request).await
    }
}
