//! Verification code issuers

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use uuid::Builder;

use crate::domain::entities::IssuedCode;
use crate::errors::{DomainError, DomainResult};

use super::traits::VerificationCodeIssuer;

/// Longest accepted code lifetime (30 days)
pub const MAX_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Compute `now + ttl_seconds`, rejecting unusable TTLs
pub(crate) fn expiry_after(ttl_seconds: i64, now: DateTime<Utc>) -> DomainResult<DateTime<Utc>> {
    if ttl_seconds <= 0 {
        return Err(DomainError::Configuration {
            message: format!("Email expiration must be positive, got {}", ttl_seconds),
        });
    }
    if ttl_seconds > MAX_TTL_SECONDS {
        return Err(DomainError::Configuration {
            message: format!(
                "Email expiration of {} seconds exceeds the maximum of {}",
                ttl_seconds, MAX_TTL_SECONDS
            ),
        });
    }

    now.checked_add_signed(Duration::seconds(ttl_seconds))
        .ok_or_else(|| DomainError::Configuration {
            message: "Email expiration overflows the timestamp range".to_string(),
        })
}

/// Issues UUID v4 codes drawn from the OS random number generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodeIssuer;

impl UuidCodeIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationCodeIssuer for UuidCodeIssuer {
    fn issue(&self, ttl_seconds: i64, now: DateTime<Utc>) -> DomainResult<IssuedCode> {
        let expires_at = expiry_after(ttl_seconds, now)?;

        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        let code = Builder::from_random_bytes(bytes).into_uuid();

        Ok(IssuedCode::new(code.to_string(), expires_at))
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use sequence::SequenceCodeIssuer;

#[cfg(any(test, feature = "test-utils"))]
mod sequence {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic issuer producing `<prefix>-1`, `<prefix>-2`, ...
    #[derive(Debug)]
    pub struct SequenceCodeIssuer {
        prefix: String,
        next: AtomicU64,
    }

    impl SequenceCodeIssuer {
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicU64::new(1),
            }
        }

        /// Number of codes issued so far
        pub fn issued(&self) -> u64 {
            self.next.load(Ordering::SeqCst) - 1
        }
    }

    impl Default for SequenceCodeIssuer {
        fn default() -> Self {
            Self::new("code")
        }
    }

    impl VerificationCodeIssuer for SequenceCodeIssuer {
        fn issue(&self, ttl_seconds: i64, now: DateTime<Utc>) -> DomainResult<IssuedCode> {
            let expires_at = expiry_after(ttl_seconds, now)?;
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            Ok(IssuedCode::new(format!("{}-{}", self.prefix, n), expires_at))
        }
    }
}
