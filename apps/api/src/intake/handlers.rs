//! Axum route handlers for the intake page.

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::session::{session_cookie, session_id_from_headers, SessionView};
use crate::intake::view::render_page;
use crate::models::intake::{IntakeForm, IntakeSnapshot};
use crate::recommendation::generator::generate_recommendation;
use crate::state::AppState;

/// GET /
///
/// Renders the page in the caller's current session state.
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let view = match session_id_from_headers(&headers) {
        Some(id) => state.sessions.view(id).await,
        None => SessionView::default(),
    };
    Html(render_page(&view))
}

/// POST /analyze
///
/// Captures the form into a snapshot, runs generation and returns the page
/// with the result. Generation failures render as an error banner, never as
/// an HTTP error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<IntakeForm>,
) -> Result<Response, AppError> {
    let existing = session_id_from_headers(&headers);
    let session_id = existing.unwrap_or_else(Uuid::new_v4);

    let snapshot = IntakeSnapshot::capture(form);
    info!(
        "Session {session_id}: analyzing {} ({}, {} impact)",
        snapshot.department().label(),
        snapshot.volume().label(),
        snapshot.impact().label()
    );

    let submission = state.sessions.submit(session_id, snapshot.clone()).await;
    let outcome = generate_recommendation(state.llm.as_ref(), &snapshot).await;
    state.sessions.complete(submission, outcome).await;

    let view = state.sessions.view(session_id).await;
    let mut response = Html(render_page(&view)).into_response();

    if existing.is_none() {
        let cookie = HeaderValue::from_str(&session_cookie(session_id))
            .context("Failed to build session cookie")?;
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }

    Ok(response)
}

/// POST /reset
///
/// Clears the session and sends the browser back to the empty page.
pub async fn handle_reset(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    if let Some(id) = session_id_from_headers(&headers) {
        state.sessions.reset(id).await;
    }
    Redirect::to("/")
}

/// GET /api/v1/session
///
/// The caller's session state as JSON.
pub async fn handle_get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionView> {
    let view = match session_id_from_headers(&headers) {
        Some(id) => state.sessions.view(id).await,
        None => SessionView::default(),
    };
    Json(view)
}
