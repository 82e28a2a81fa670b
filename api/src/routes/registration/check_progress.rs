use actix_web::{web, HttpResponse};

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, SettingsProvider};

use super::AppState;
use crate::handlers::{outcome_response, ApiError};

/// Handler for GET /user/register/check-progress/{verify_code}
///
/// On success `data` carries the human-readable description of the account
/// status.
pub async fn check_progress<A, P, N, S>(
    state: web::Data<AppState<A, P, N, S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    let code = path.into_inner();
    log::info!("Processing check-progress request");

    let outcome = state.registration_service.check_progress(&code).await?;

    Ok(outcome_response(outcome))
}
