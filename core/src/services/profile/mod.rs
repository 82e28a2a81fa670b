//! Profile submission after email verification

mod service;


pub use service::ProfileService;
