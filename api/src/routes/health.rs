use actix_web::{web, HttpResponse};
use chrono::Utc;

use ra_infra::database::{DatabasePool, PoolStatistics};
use ra_infra::InfrastructureError;
use ra_shared::types::{ComponentHealth, HealthResponse};

/// Handler for GET /health
///
/// Pings the database when a pool is registered as app data. A failed ping
/// turns the response into 503 `unhealthy`.
pub async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database = match pool {
        Some(pool) => Some(database_health(
            pool.health_check().await,
            pool.get_statistics(),
        )),
        None => None,
    };

    let healthy = database.as_ref().map_or(true, ComponentHealth::is_up);
    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        service: "regauth-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        database,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// Fold a ping result and the pool usage into a component status
pub fn database_health(
    ping: Result<bool, InfrastructureError>,
    stats: PoolStatistics,
) -> ComponentHealth {
    match ping {
        Ok(true) => ComponentHealth::up(stats.to_string()),
        Ok(false) => ComponentHealth::down("Unexpected ping result"),
        Err(e) => {
            log::error!("Database health check failed: {}", e);
            ComponentHealth::down(e.to_string())
        }
    }
}
