//! Repository interfaces for account and profile persistence.

pub mod account;
pub mod profile;

pub use account::AccountRepository;
pub use profile::ProfileRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use account::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile::MockProfileRepository;
