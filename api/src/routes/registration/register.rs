use actix_web::{web, HttpResponse};
use validator::Validate;

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, SettingsProvider};
use ra_shared::email::mask_email;

use super::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::{outcome_response, validation_error_response, ApiError};

/// Handler for POST /user/register
///
/// Starts a registration, or resends the registration email once the
/// previous code has expired.
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com" }
/// ```
///
/// # Response
///
/// `{"code": "SUCCESS", "data": null}` with 200 when the email was sent.
/// 403 `Forbidden` while the last code is still valid, 400 `ACCOUNT_EXISTS`
/// once a profile has been submitted, 500 `FAILED` when delivery failed.
pub async fn register_user<A, P, N, S>(
    state: web::Data<AppState<A, P, N, S>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    let request = request.into_inner().normalized();

    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for register request: {}", errors);
        return Ok(validation_error_response(&errors));
    }

    log::info!("Processing register request for {}", mask_email(&request.email));

    let outcome = state
        .registration_service
        .register_or_resend(&request.email)
        .await?;

    log::info!(
        "Register request for {} finished with {}",
        mask_email(&request.email),
        outcome.message_code()
    );

    Ok(outcome_response(outcome))
}
