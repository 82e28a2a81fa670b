//! Shared wiring for the route tests: in-memory repositories, a recording
//! notifier, a fixed clock at t=0 and codes `code-1`, `code-2`, ...

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, TimeZone, Utc};

use ra_api::AppState;
use ra_core::repositories::{AccountRepository, MockAccountRepository, MockProfileRepository};
use ra_core::services::{
    FixedClock, MockEmailNotifier, ProfileService, RegistrationService, SequenceCodeIssuer,
    StaticSettingsProvider,
};
use ra_shared::config::EmailConfig;

pub type TestState<A> =
    AppState<A, MockProfileRepository, MockEmailNotifier, StaticSettingsProvider>;

pub struct TestContext<A: AccountRepository> {
    pub state: web::Data<TestState<A>>,
    pub accounts: Arc<A>,
    pub profiles: Arc<MockProfileRepository>,
    pub notifier: Arc<MockEmailNotifier>,
    pub clock: Arc<FixedClock>,
}

/// Instant `seconds` after the Unix epoch
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

impl TestContext<MockAccountRepository> {
    /// In-memory context with a 600s code lifetime
    pub fn new() -> Self {
        Self::with_accounts(Arc::new(MockAccountRepository::new()))
    }
}

impl<A: AccountRepository + 'static> TestContext<A> {
    pub fn with_accounts(accounts: Arc<A>) -> Self {
        let profiles = Arc::new(MockProfileRepository::new());
        let notifier = Arc::new(MockEmailNotifier::new());
        let clock = Arc::new(FixedClock::at_seconds(0));
        let settings = Arc::new(StaticSettingsProvider::new(EmailConfig {
            expiration_seconds: 600,
            ..EmailConfig::default()
        }));

        let registration_service = Arc::new(
            RegistrationService::new(accounts.clone(), notifier.clone(), settings)
                .with_issuer(Arc::new(SequenceCodeIssuer::new("code")))
                .with_clock(clock.clone()),
        );
        let profile_service = Arc::new(
            ProfileService::new(accounts.clone(), profiles.clone()).with_clock(clock.clone()),
        );

        let state = web::Data::new(AppState {
            registration_service,
            profile_service,
        });

        Self {
            state,
            accounts,
            profiles,
            notifier,
            clock,
        }
    }

    pub fn set_time(&self, seconds: i64) {
        self.clock.set(at(seconds));
    }
}
