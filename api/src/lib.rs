//! # RegAuth API
//!
//! actix-web surface for the email self-registration flow. Handlers validate
//! the request body, call into `ra_core` services and render the resulting
//! `RegistrationOutcome` as a `{code, data}` envelope.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;

pub use app::create_app;
pub use routes::registration::AppState;
