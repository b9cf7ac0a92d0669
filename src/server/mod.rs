//! HTTP surface for HSA Roster
//!
//! `GET /` renders the processed roster as an HTML page. `GET /api/employees`
//! returns the same roster as JSON and `GET /api/health` is a liveness probe.
//! Every roster request goes through the shared [`RosterClient`], so a fresh
//! cache is served without touching the roster API.

pub mod render;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::error;

use crate::data::{Employee, RosterClient, RosterError};
use crate::hsa::process_employees;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    client: RosterClient,
}

impl AppState {
    pub fn new(client: RosterClient) -> Self {
        Self { client }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body returned with a 500 when the roster cannot be loaded
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/employees", get(list_employees))
        .route("/api/health", get(health_check))
        .with_state(state)
}

/// Loads the roster and recomputes derived fields on a private copy
///
/// The cached snapshot always stays as fetched.
async fn processed_roster(state: &AppState) -> Result<Vec<Employee>, RosterError> {
    let roster = state.client.fetch_employees().await?;
    let mut employees = roster.as_ref().clone();
    process_employees(&mut employees);
    Ok(employees)
}

fn internal_error(e: RosterError) -> Response {
    error!(error = %e, "Failed to load employee roster");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// GET / - Rendered roster page
async fn index(State(state): State<AppState>) -> Response {
    match processed_roster(&state).await {
        Ok(employees) => Html(render::render_roster(&employees)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/employees - Processed roster as JSON
async fn list_employees(State(state): State<AppState>) -> Response {
    match processed_roster(&state).await {
        Ok(employees) => Json(ApiResponse::ok(employees)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}
