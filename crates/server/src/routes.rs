//! API route handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use model::{FeatureMatrix, Regressor, Transformer};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Prediction request: ordered month numbers
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub months: Vec<i64>,
}

/// One forecast entry, paired with the month it was requested for
#[derive(Debug, Serialize)]
pub struct ForecastEntry {
    pub month: i64,
    pub consumption: f64,
}

/// Prediction response, in request order
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub forecast: Vec<ForecastEntry>,
}

/// Build the router with middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fixed welcome message, served regardless of model state
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Time Series Forecast API. POST to /predict with months."
    }))
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - the bundle loaded before the listener, so report it
async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.bundle().name,
        "scaler": state.bundle().scaler.is_some()
    }))
}

/// Predict consumption for each requested month
///
/// Builds the single-column feature matrix, applies the scaler transform
/// when one was loaded, and pairs predictions with their input months in
/// request order.
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let months = request.months;

    let mut x = FeatureMatrix::from_column(months.iter().map(|&m| m as f64).collect());
    if let Some(scaler) = state.bundle().scaler.as_ref() {
        x = scaler.transform(&x)?;
    }
    let predictions = state.bundle().model.predict(&x)?;

    let forecast = months
        .into_iter()
        .zip(predictions)
        .map(|(month, consumption)| ForecastEntry { month, consumption })
        .collect();

    Ok(Json(PredictResponse { forecast }))
}
