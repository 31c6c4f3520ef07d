//! Per-session view state: the held snapshot and where the view is in
//! `Idle → Submitted → Displayed | Errored → (reset) → Idle`.
//!
//! Sessions are keyed by a cookie. An entry exists only between a submit and
//! the next reset, or until it sits untouched for `SESSION_IDLE_TTL`; a
//! session with no live entry is `Idle`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderMap};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::models::intake::IntakeSnapshot;
use crate::recommendation::generator::GenerationFailure;

pub const SESSION_COOKIE: &str = "analyzer_session";

/// Sessions untouched for this long are dropped.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Idle,
    Submitted,
    Displayed {
        text: String,
    },
    Errored {
        message: String,
    },
}

impl ViewState {
    pub fn from_outcome(outcome: Result<String, GenerationFailure>) -> Self {
        match outcome {
            Ok(text) => ViewState::Displayed { text },
            Err(failure) => ViewState::Errored {
                message: failure.message(),
            },
        }
    }
}

/// What a session currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub state: ViewState,
    pub snapshot: Option<IntakeSnapshot>,
}

/// Ticket for an in-flight generation. Only the latest ticket of a session
/// may record an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub session_id: Uuid,
    seq: u64,
}

#[derive(Debug)]
struct Session {
    snapshot: IntakeSnapshot,
    state: ViewState,
    seq: u64,
    last_touched: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.last_touched) >= SESSION_IDLE_TTL
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    next_seq: Arc<AtomicU64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn view(&self, session_id: Uuid) -> SessionView {
        let now = Instant::now();
        match self.sessions.read().await.get(&session_id) {
            Some(session) if !session.is_expired(now) => SessionView {
                state: session.state.clone(),
                snapshot: Some(session.snapshot.clone()),
            },
            _ => SessionView::default(),
        }
    }

    /// Replaces whatever the session held with `snapshot` and moves it to
    /// `Submitted`. Expired sessions are swept while the write lock is held.
    pub async fn submit(&self, session_id: Uuid, snapshot: IntakeSnapshot) -> Submission {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} idle sessions");
        }

        sessions.insert(
            session_id,
            Session {
                snapshot,
                state: ViewState::Submitted,
                seq,
                last_touched: now,
            },
        );
        debug!("Session {session_id} submitted (seq {seq})");
        Submission { session_id, seq }
    }

    /// Records the outcome of `submission`. Returns false, leaving the
    /// session untouched, if it was reset or resubmitted in the meantime.
    pub async fn complete(
        &self,
        submission: Submission,
        outcome: Result<String, GenerationFailure>,
    ) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&submission.session_id) {
            Some(session) if session.seq == submission.seq => {
                session.state = ViewState::from_outcome(outcome);
                session.last_touched = Instant::now();
                true
            }
            _ => {
                debug!(
                    "Discarding stale outcome for session {} (seq {})",
                    submission.session_id, submission.seq
                );
                false
            }
        }
    }

    /// Drops the session's snapshot and result. A no-op for idle sessions.
    pub async fn reset(&self, session_id: Uuid) {
        if self.sessions.write().await.remove(&session_id).is_some() {
            debug!("Session {session_id} reset");
        }
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Reads the session id from the request's `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

pub fn session_cookie(session_id: Uuid) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}
