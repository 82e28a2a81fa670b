//! Verification code issuance and delivery collaborators
//!
//! This module provides the seams the registration flow depends on:
//! - Code issuance with a configurable lifetime
//! - Per-API email settings, read fresh on every call
//! - Notification delivery reporting success or failure

mod issuer;
mod settings;
mod traits;
mod types;

#[cfg(any(test, feature = "test-utils"))]
mod mock;

#[cfg(test)]
mod tests;

pub use issuer::{UuidCodeIssuer, MAX_TTL_SECONDS};
pub use settings::StaticSettingsProvider;
pub use traits::{Notifier, SettingsProvider, VerificationCodeIssuer};
pub use types::{AssociatedApi, EmailSettings, NotificationRequest};

#[cfg(any(test, feature = "test-utils"))]
pub use issuer::SequenceCodeIssuer;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockEmailNotifier;
