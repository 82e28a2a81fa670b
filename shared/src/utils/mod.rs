//! Common utility functions

pub mod email;

pub use email::{is_valid_email, mask_email, normalize_email};
