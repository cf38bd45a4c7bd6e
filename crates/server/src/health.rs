use axum::{extract::State, http::StatusCode, Json};
use babywear_core::errors::ApplicationError;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::routes::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "babywear-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(state: &AppState) -> HealthCheck {
    match state.service.verify_catalog() {
        Ok(report) => HealthCheck {
            status: "ready",
            detail: format!(
                "{} items translated for {} shops",
                report.items_checked, report.shops_checked
            ),
        },
        Err(error) => {
            let interface = ApplicationError::from(error).into_interface("health");
            warn!(
                event_name = "system.health.catalog_degraded",
                correlation_id = %interface.correlation_id(),
                error = %interface.message(),
                "catalog no longer covers the recommender output"
            );
            HealthCheck { status: "degraded", detail: interface.user_message().to_string() }
        }
    }
}
