//! Mapping from domain results to HTTP responses
//!
//! Every response body is the `{code, data}` envelope. Rejections and
//! notification failures arrive as a `RegistrationOutcome`; store and
//! settings failures arrive as `DomainError` and are rendered by `ApiError`.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use validator::ValidationErrors;

use ra_core::{DomainError, RegistrationOutcome};
use ra_shared::types::{HttpBody, MessageCode};

/// Error returned by route handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let data = match self {
            ApiError::Domain(DomainError::Conflict { .. }) => {
                log::warn!("Request lost an update race: {}", self);
                Some("The account was modified concurrently, please retry.".to_string())
            }
            ApiError::Domain(_) => {
                log::error!("Request failed: {}", self);
                None
            }
        };

        HttpResponse::build(status).json(HttpBody::build(MessageCode::Failed, data))
    }
}

/// HTTP status for an outcome
pub fn outcome_status(outcome: &RegistrationOutcome) -> StatusCode {
    match outcome {
        RegistrationOutcome::Success { .. } => StatusCode::OK,
        RegistrationOutcome::Forbidden { .. } => StatusCode::FORBIDDEN,
        RegistrationOutcome::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        RegistrationOutcome::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render an outcome as a response
pub fn outcome_response(outcome: RegistrationOutcome) -> HttpResponse {
    let status = outcome_status(&outcome);
    HttpResponse::build(status).json(outcome.into_body())
}

/// 400 VALIDATION_ERROR listing the offending fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, _)| field.to_string())
        .collect();
    fields.sort();

    let message = format!("Invalid request fields: {}", fields.join(", "));
    HttpResponse::BadRequest().json(HttpBody::build(MessageCode::ValidationError, Some(message)))
}

/// JSON extractor error handler producing the envelope instead of plain text
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected malformed request body: {}", err);

    let body = HttpBody::build(MessageCode::ValidationError, Some(err.to_string()));
    let response = HttpResponse::BadRequest().json(body);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ra_core::messages;

    #[test]
    fn test_outcome_status_mapping() {
        assert_eq!(outcome_status(&RegistrationOutcome::success()), StatusCode::OK);
        assert_eq!(
            outcome_status(&RegistrationOutcome::forbidden(messages::RESEND_SUPPRESSED)),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            outcome_status(&RegistrationOutcome::rejected(MessageCode::AccountDoesNotExist)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            outcome_status(&RegistrationOutcome::failed(messages::ESCALATE)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let error = ApiError::from(DomainError::Conflict {
            message: "stale version".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_other_domain_errors_map_to_500() {
        let error = ApiError::from(DomainError::Configuration {
            message: "missing redirect".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
