//! Request bodies accepted by the HTTP layer

pub mod registration;

pub use registration::{ProfileRequest, ProgressRequest, RegisterRequest};
