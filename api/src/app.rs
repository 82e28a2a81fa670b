//! Application factory
//!
//! Builds the actix-web `App` around an `AppState`. The same factory backs
//! the server binary and the integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use ra_core::repositories::{AccountRepository, ProfileRepository};
use ra_core::services::{Notifier, SettingsProvider};
use ra_shared::config::ServerConfig;
use ra_shared::types::{HttpBody, MessageCode};

use crate::handlers::json_error_handler;
use crate::routes::health::health_check;
use crate::routes::registration::{
    check_progress, register_user, request_progress_code, submit_profile, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<A, P, N, S>(
    app_state: web::Data<AppState<A, P, N, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    create_app_with_payload_limit(app_state, ServerConfig::default().max_payload_size)
}

/// Same as `create_app` with an explicit JSON body limit
pub fn create_app_with_payload_limit<A, P, N, S>(
    app_state: web::Data<AppState<A, P, N, S>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    N: Notifier + 'static,
    S: SettingsProvider + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/user/register")
                .route("", web::post().to(register_user::<A, P, N, S>))
                .route(
                    "/profile/{verify_code}",
                    web::post().to(submit_profile::<A, P, N, S>),
                )
                .route("/progress", web::post().to(request_progress_code::<A, P, N, S>))
                .route(
                    "/check-progress/{verify_code}",
                    web::get().to(check_progress::<A, P, N, S>),
                ),
        )
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(HttpBody::build(
                MessageCode::Failed,
                Some("The requested resource was not found".to_string()),
            ))
        }))
}
