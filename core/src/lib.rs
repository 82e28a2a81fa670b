//! # RegAuth Core
//!
//! Core business logic and domain layer for the RegAuth backend.
//! This crate contains the account aggregate, the registration state machine,
//! repository interfaces, and error types that form the foundation of the
//! email self-registration flow.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, AccountStatus, ClientProfile, IssuedCode, ProfileSubmission,
};
pub use domain::value_objects::{messages, RegistrationOutcome};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AccountRepository, ProfileRepository};
pub use services::{
    AssociatedApi, Clock, EmailSettings, NotificationRequest, Notifier, ProfileService,
    RegistrationService, SettingsProvider, StaticSettingsProvider, SystemClock, UuidCodeIssuer,
    VerificationCodeIssuer,
};
