use actix_web::{web, HttpResponse};
use validator::Validate;

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, SettingsProvider};

use super::AppState;
use crate::dto::ProfileRequest;
use crate::handlers::{outcome_response, validation_error_response, ApiError};

/// Handler for POST /user/register/profile/{verify_code}
///
/// Stores the client profile and moves the account into review. The
/// registration code from the verification email is consumed.
///
/// # Request Body
///
/// ```json
/// {
///     "full_name": "Alice Smith",
///     "phone": "+1 555 0100",
///     "company": "Example Ltd",
///     "address": null
/// }
/// ```
pub async fn submit_profile<A, P, N, S>(
    state: web::Data<AppState<A, P, N, S>>,
    path: web::Path<String>,
    request: web::Json<ProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for profile submission: {}", errors);
        return Ok(validation_error_response(&errors));
    }

    let code = path.into_inner();
    log::info!("Processing profile submission");

    let outcome = state
        .profile_service
        .submit_profile(&code, request.into())
        .await?;

    Ok(outcome_response(outcome))
}
