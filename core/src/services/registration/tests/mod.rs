//! Tests for the registration state machine

#[cfg(test)]
mod decision_tests;
#[cfg(test)]
mod mocks;
#[cfg(test)]
mod service_tests;
