//! Registration service module
//!
//! The email self-registration state machine: register or resend, request a
//! progress-inquiry code, and check registration progress. Decisions are pure
//! functions of the account snapshot and the current instant; the service
//! executes them against the store and the notifier.

mod decision;
mod service;

#[cfg(test)]
mod tests;

pub use decision::{
    decide_progress_check, decide_progress_code_request, decide_registration_or_resend,
    ProgressCodeDecision, RegistrationDecision,
};
pub use service::RegistrationService;
