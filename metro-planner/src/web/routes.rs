//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{InvalidStationKey, StationKey};
use crate::planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/routes/fewest-transfers", get(fewest_transfers))
        .route("/routes/fastest", get(fastest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations in the order they were added, optionally for one line.
async fn list_stations(
    State(state): State<AppState>,
    query: Result<Query<StationsQuery>, QueryRejection>,
) -> Result<Json<StationsResponse>, AppError> {
    let Query(query) = query?;

    let stations = match query.line.as_deref() {
        Some(line) => state
            .network
            .stations_on_line(line)
            .into_iter()
            .map(|s| StationRecord::from(s.as_ref()))
            .collect(),
        None => state
            .network
            .stations()
            .map(|s| StationRecord::from(s.as_ref()))
            .collect(),
    };

    Ok(Json(StationsResponse { stations }))
}

/// Route with the fewest connections.
async fn fewest_transfers(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let (from, to) = parse_endpoints(query?.0)?;
    let route = planner::Router::new(&state.network).fewest_transfers(&from, &to);
    Ok(Json(RouteResponse::from(route)))
}

/// Route with the lowest total travel time.
async fn fastest(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let (from, to) = parse_endpoints(query?.0)?;
    let route = planner::Router::new(&state.network).fastest(&from, &to);
    Ok(Json(RouteResponse::from(route)))
}

fn parse_endpoints(query: RouteQuery) -> Result<(StationKey, StationKey), AppError> {
    let from = StationKey::parse(&query.from)?;
    let to = StationKey::parse(&query.to)?;
    Ok((from, to))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidStationKey> for AppError {
    fn from(e: InvalidStationKey) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
