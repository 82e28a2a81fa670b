//! Domain entities representing core business objects.

pub mod account;
pub mod account_status;
pub mod issued_code;
pub mod profile;

// Re-export commonly used types
pub use account::Account;
pub use account_status::AccountStatus;
pub use issued_code::IssuedCode;
pub use profile::{ClientProfile, ProfileSubmission};
