use actix_web::{web, HttpResponse};
use validator::Validate;

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, SettingsProvider};
use ra_shared::email::mask_email;

use super::AppState;
use crate::dto::ProgressRequest;
use crate::handlers::{outcome_response, validation_error_response, ApiError};

/// Handler for POST /user/register/progress
///
/// Emails a progress code that can later be exchanged for a status
/// description. Returns 400 `LAST_VERIFICATION_CODE_VALID` while the previous
/// progress code is still active.
pub async fn request_progress_code<A, P, N, S>(
    state: web::Data<AppState<A, P, N, S>>,
    request: web::Json<ProgressRequest>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    let request = request.into_inner().normalized();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for progress request: {}", errors);
        return Ok(validation_error_response(&errors));
    }

    log::info!("Processing progress code request for {}", mask_email(&request.email));

    let outcome = state
        .registration_service
        .request_progress_code(&request.email)
        .await?;

    Ok(outcome_response(outcome))
}
