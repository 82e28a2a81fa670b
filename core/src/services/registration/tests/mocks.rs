//! Test fixture wiring the registration service to in-memory collaborators

use chrono::{DateTime, TimeZone, Utc};
use ra_shared::config::EmailConfig;
use std::sync::Arc;

use crate::domain::entities::{Account, AccountStatus, IssuedCode};
use crate::repositories::MockAccountRepository;
use crate::services::clock::FixedClock;
use crate::services::registration::RegistrationService;
use crate::services::verification::{
    MockEmailNotifier, SequenceCodeIssuer, StaticSettingsProvider,
};

pub type TestService =
    RegistrationService<MockAccountRepository, MockEmailNotifier, StaticSettingsProvider>;

pub struct Fixture {
    pub service: TestService,
    pub accounts: Arc<MockAccountRepository>,
    pub notifier: Arc<MockEmailNotifier>,
    pub settings: Arc<StaticSettingsProvider>,
    pub clock: Arc<FixedClock>,
    pub issuer: Arc<SequenceCodeIssuer>,
}

/// Instant `seconds` after the Unix epoch
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

/// Email config with the given TTL and default redirects
pub fn email_config(ttl_seconds: i64) -> EmailConfig {
    EmailConfig {
        expiration_seconds: ttl_seconds,
        ..EmailConfig::default()
    }
}

impl Fixture {
    /// Service at t=0 with TTL 600s
    pub fn new() -> Self {
        Self::with_config(email_config(600))
    }

    pub fn with_config(config: EmailConfig) -> Self {
        let accounts = Arc::new(MockAccountRepository::new());
        let notifier = Arc::new(MockEmailNotifier::new());
        let settings = Arc::new(StaticSettingsProvider::new(config));
        let clock = Arc::new(FixedClock::at_seconds(0));
        let issuer = Arc::new(SequenceCodeIssuer::new("code"));

        let service = RegistrationService::new(accounts.clone(), notifier.clone(), settings.clone())
            .with_issuer(issuer.clone())
            .with_clock(clock.clone());

        Self {
            service,
            accounts,
            notifier,
            settings,
            clock,
            issuer,
        }
    }

    pub fn set_time(&self, seconds: i64) {
        self.clock.set(at(seconds));
    }
}

/// Stored account at `status` whose registration code expires at `expires_at`
pub fn account_with_registration_code(
    email: &str,
    status: AccountStatus,
    code: &str,
    expires_at: i64,
) -> Account {
    let mut account = Account::new(email, at(0));
    account.status = status;
    account.registration_code = Some(IssuedCode::new(code, at(expires_at)));
    account
}

/// Stored account at `status` whose progress code expires at `expires_at`
pub fn account_with_progress_code(
    email: &str,
    status: AccountStatus,
    code: &str,
    expires_at: i64,
) -> Account {
    let mut account = Account::new(email, at(0));
    account.status = status;
    account.progress_code = Some(IssuedCode::new(code, at(expires_at)));
    account
}
