//! Response rendering shared by all routes

pub mod error;

pub use error::{json_error_handler, outcome_response, validation_error_response, ApiError};
