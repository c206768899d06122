use crate::domain::model::{
    FieldError, HealthResponse, PredictionResponse, ServiceInfo, WineFeatures,
};
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Liveness probe. The model handle cannot be unset once the process is
/// serving, so it is not re-checked here.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    let parsed: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Rejected unparseable request body: {}", e);
            return validation_failure(vec![FieldError::new(
                "body",
                "request body is not valid JSON",
            )]);
        }
    };

    let features = match WineFeatures::from_json(&parsed) {
        Ok(features) => features,
        Err(errors) => {
            // 只記錄欄位數量，不記錄內容
            tracing::debug!("Rejected request with {} invalid field(s)", errors.len());
            return validation_failure(errors);
        }
    };

    match state.model.score(&features.to_vector()) {
        Ok(prediction) => (StatusCode::OK, Json(PredictionResponse { prediction })).into_response(),
        Err(e) => {
            tracing::error!("Scoring failed on validated input: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal scoring error" })),
            )
                .into_response()
        }
    }
}

fn validation_failure(details: Vec<FieldError>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": "validation failed",
            "details": details,
        })),
    )
        .into_response()
}
