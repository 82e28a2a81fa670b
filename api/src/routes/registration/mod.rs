//! Self-registration route handlers
//!
//! - `POST /user/register` issues or resends the registration code
//! - `POST /user/register/profile/{verify_code}` submits the client profile
//! - `POST /user/register/progress` issues or resends the progress code
//! - `GET /user/register/check-progress/{verify_code}` describes the account status

pub mod check_progress;
pub mod profile;
pub mod progress;
pub mod register;

use std::sync::Arc;

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, ProfileService, RegistrationService, SettingsProvider};

pub use check_progress::check_progress;
pub use profile::submit_profile;
pub use progress::request_progress_code;
pub use register::register_user;

/// Application state that holds shared services
pub struct AppState<A, P, N, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    N: Notifier,
    S: SettingsProvider,
{
    pub registration_service: Arc<RegistrationService<A, N, S>>,
    pub profile_service: Arc<ProfileService<A, P>>,
}
