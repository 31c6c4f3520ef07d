//! Axum route handlers for the Recommendation JSON API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::intake::session::ViewState;
use crate::models::intake::{IntakeForm, IntakeSnapshot};
use crate::recommendation::generator::generate_recommendation;
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Stateless variant of the form submission. Always answers 200 with either
/// `{"state":"displayed","text":...}` or `{"state":"errored","message":...}`;
/// only a malformed body is an HTTP error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<IntakeForm>, JsonRejection>,
) -> Result<Json<ViewState>, AppError> {
    let Json(form) = payload?;
    let snapshot = IntakeSnapshot::capture(form);

    let outcome = generate_recommendation(state.llm.as_ref(), &snapshot).await;

    Ok(Json(ViewState::from_outcome(outcome)))
}
