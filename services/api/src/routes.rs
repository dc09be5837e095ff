use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use daylight::daylighting::{daylight_router, DaylightService, MetricKey, Orientation};
use daylight::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes(service: Arc<DaylightService>) -> Router {
    daylight_router(service.clone())
        .merge(auxiliary_router(service))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

fn auxiliary_router(service: Arc<DaylightService>) -> Router {
    Router::new()
        .route("/api/v1/daylight/orientations", get(orientations_endpoint))
        .route("/api/v1/daylight/stats", get(stats_endpoint))
        .route("/api/v1/daylight/images", get(images_endpoint))
        .route("/api/v1/daylight/images/:metric", get(image_file_endpoint))
        .route("/api/v1/daylight/diagnostics", get(diagnostics_endpoint))
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn orientations_endpoint() -> Json<serde_json::Value> {
    let orientations: Vec<_> = Orientation::ordered()
        .into_iter()
        .map(|orientation| {
            json!({
                "code": orientation.code(),
                "name": orientation.label(),
            })
        })
        .collect();
    Json(json!({ "orientations": orientations }))
}

pub(crate) async fn stats_endpoint(
    State(service): State<Arc<DaylightService>>,
) -> Result<Response, AppError> {
    let stats = service.stats()?;
    Ok(Json(stats).into_response())
}

pub(crate) async fn images_endpoint(State(service): State<Arc<DaylightService>>) -> Response {
    Json(json!({ "images": service.images() })).into_response()
}

pub(crate) async fn image_file_endpoint(
    State(service): State<Arc<DaylightService>>,
    Path(metric): Path<String>,
) -> Response {
    let Some(key) = MetricKey::parse(&metric) else {
        let payload = json!({ "error": format!("unknown metric '{metric}'") });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    };

    let path = service.image_path(key);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => {
            let payload = json!({
                "error": format!("image not available for metric '{}'", key.label()),
                "filename": path.display().to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn diagnostics_endpoint(State(service): State<Arc<DaylightService>>) -> Response {
    Json(service.diagnostics()).into_response()
}
