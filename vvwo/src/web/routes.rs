//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Local;
use tracing::{debug, warn};

use crate::dispatch::DispatchOutcome;
use crate::nlu::QueryParser;
use crate::transit::TransitProvider;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P, T>(state: AppState<P, T>) -> Router
where
    P: QueryParser + Send + Sync + 'static,
    T: TransitProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/ask", post(ask::<P, T>))
        .route("/results", get(results::<P, T>))
        .route("/session", delete(reset_session::<P, T>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse an utterance, dispatch it, and return what to show.
async fn ask<P, T>(
    State(state): State<AppState<P, T>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<ResultsView>, AppError>
where
    P: QueryParser + Send + Sync + 'static,
    T: TransitProvider + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let outcome = state.session.ask(&req.utterance).await;
    match &outcome {
        DispatchOutcome::Failed { query, error } => {
            debug!(%query, %error, "ask finished without transit response")
        }
        other => debug!(outcome = ?other, "ask finished"),
    }

    let snapshot = state.session.snapshot().await;
    Ok(Json(ResultsView::from_state(
        &snapshot,
        Local::now().naive_local(),
    )))
}

/// Current results view.
async fn results<P, T>(State(state): State<AppState<P, T>>) -> Json<ResultsView>
where
    P: QueryParser + Send + Sync + 'static,
    T: TransitProvider + Send + Sync + 'static,
{
    let snapshot = state.session.snapshot().await;
    Json(ResultsView::from_state(&snapshot, Local::now().naive_local()))
}

/// Forget the current query and results.
async fn reset_session<P, T>(State(state): State<AppState<P, T>>) -> StatusCode
where
    P: QueryParser + Send + Sync + 'static,
    T: TransitProvider + Send + Sync + 'static,
{
    state.session.reset().await;
    StatusCode::NO_CONTENT
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
