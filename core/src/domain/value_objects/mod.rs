//! Value objects for the domain layer

pub mod registration_outcome;

pub use registration_outcome::{messages, RegistrationOutcome};
