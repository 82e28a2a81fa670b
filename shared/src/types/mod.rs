//! Type definitions shared between the core and the HTTP layer
//!
//! - `response` - The `{code, data}` envelope and its message codes

pub mod response;

pub use response::{ComponentHealth, HealthResponse, HttpBody, MessageCode};
