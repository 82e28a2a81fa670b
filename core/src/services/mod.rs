//! Business services containing domain logic and use cases.

pub mod clock;
pub mod profile;
pub mod registration;
pub mod verification;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use profile::ProfileService;
pub use registration::RegistrationService;
pub use verification::{
    AssociatedApi, EmailSettings, NotificationRequest, Notifier, SettingsProvider,
    StaticSettingsProvider, UuidCodeIssuer, VerificationCodeIssuer,
};

#[cfg(any(test, feature = "test-utils"))]
pub use clock::FixedClock;
#[cfg(any(test, feature = "test-utils"))]
pub use verification::{MockEmailNotifier, SequenceCodeIssuer};
