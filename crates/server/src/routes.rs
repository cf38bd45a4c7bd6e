//! HTTP surface of the recommender.
//!
//! - `GET /recommend`: items for the child's age on a target date
//! - `GET /milestones`: items, size and date for every age from 0 to 24 months
//! - `GET /health`: catalog readiness

use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        HeaderName, HeaderValue, Method, StatusCode,
    },
    routing::get,
    Json, Router,
};
use babywear_core::config::ServerConfig;
use babywear_core::errors::{ApplicationError, RequestError};
use babywear_core::service::{
    parse_date, parse_shop, parse_temperature, MilestoneRequest, MilestoneResponse,
    Recommendation, RecommendationRequest, RecommendationService,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::health;

#[derive(Clone)]
pub struct AppState {
    pub service: RecommendationService,
    today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(service: RecommendationService) -> Self {
        Self { service, today: local_today }
    }

    #[cfg(test)]
    pub fn with_today(service: RecommendationService, today: fn() -> NaiveDate) -> Self {
        Self { service, today }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    pub birth_date: Option<String>,
    pub target_date: Option<String>,
    pub current_temp: Option<String>,
    pub target_shop: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MilestonesQuery {
    pub birth_date: Option<String>,
    pub target_shop: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub correlation_id: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub fn router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/recommend", get(recommend))
        .route("/milestones", get(milestones))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(server))
}

/// `*` (or no configured origins) mirrors the caller's origin so credentials
/// stay allowed; otherwise only the listed origins pass.
pub fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let allow_origin = if server.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(error) => {
                    warn!(
                        event_name = "system.cors.invalid_origin",
                        origin = %origin,
                        error = %error,
                        "ignoring allowed origin that is not a valid header value"
                    );
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([
            ORIGIN,
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}

async fn recommend(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Recommendation>, ApiError> {
    let correlation_id = new_correlation_id();
    let request = recommend_request(&query).map_err(|error| reject(error, &correlation_id))?;

    let recommendation = state
        .service
        .recommend(request, (state.today)())
        .map_err(|error| reject(error, &correlation_id))?;

    info!(
        event_name = "http.recommend.served",
        correlation_id = %correlation_id,
        age_in_months = recommendation.age_in_months,
        item_count = recommendation.items.len(),
        "recommendation served"
    );

    Ok(Json(recommendation))
}

async fn milestones(
    State(state): State<AppState>,
    Query(query): Query<MilestonesQuery>,
) -> Result<Json<MilestoneResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let birth_date = required_date("birth_date", query.birth_date.as_deref())
        .map_err(|error| reject(error, &correlation_id))?;

    let response = state.service.milestones(MilestoneRequest {
        birth_date,
        target_shop: parse_shop(query.target_shop.as_deref()),
    });

    info!(
        event_name = "http.milestones.served",
        correlation_id = %correlation_id,
        milestone_count = response.milestones.len(),
        "milestones served"
    );

    Ok(Json(response))
}

fn recommend_request(query: &RecommendQuery) -> Result<RecommendationRequest, RequestError> {
    let birth_date = required_date("birth_date", query.birth_date.as_deref())?;
    let target_date = optional(query.target_date.as_deref())
        .map(|raw| parse_date("target_date", raw))
        .transpose()?;
    let temperature = optional(query.current_temp.as_deref())
        .map(|raw| parse_temperature("current_temp", raw))
        .transpose()?;

    Ok(RecommendationRequest {
        birth_date,
        target_date,
        temperature,
        target_shop: parse_shop(query.target_shop.as_deref()),
    })
}

fn required_date(field: &'static str, raw: Option<&str>) -> Result<NaiveDate, RequestError> {
    match optional(raw) {
        Some(raw) => parse_date(field, raw),
        None => Err(RequestError::MissingParameter { field }),
    }
}

fn optional(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn reject(error: RequestError, correlation_id: &str) -> ApiError {
    let interface = ApplicationError::from(error).into_interface(correlation_id);
    warn!(
        event_name = "http.request.rejected",
        correlation_id = %correlation_id,
        reason = %interface.message(),
        "request failed validation"
    );

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: interface.message().to_string(),
            correlation_id: interface.correlation_id().to_string(),
        }),
    )
}

fn new_correlation_id() -> String {
    format!("req-{}", Uuid::new_v4().simple())
}
