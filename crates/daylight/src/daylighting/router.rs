use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::metrics::MetricKey;
use super::service::{AssessmentError, DaylightService};
use super::window::WindowRequest;

/// Router builder exposing the assessment and model-sheet endpoints.
pub fn daylight_router(service: Arc<DaylightService>) -> Router {
    Router::new()
        .route("/api/v1/daylight/assessments", post(assess_handler))
        .route("/api/v1/daylight/sheets/:metric", get(sheet_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<DaylightService>>,
    axum::Json(request): axum::Json<WindowRequest>,
) -> Response {
    match service.assess(request) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(AssessmentError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentError::Prediction(error)) if error.is_client_fault() => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn sheet_handler(
    State(service): State<Arc<DaylightService>>,
    Path(metric): Path<String>,
) -> Response {
    match MetricKey::parse(&metric) {
        Some(key) => (StatusCode::OK, axum::Json(service.sheet(key))).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown metric '{metric}'"),
                "valid_metrics": MetricKey::ordered()
                    .iter()
                    .map(|key| key.label())
                    .collect::<Vec<_>>(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
