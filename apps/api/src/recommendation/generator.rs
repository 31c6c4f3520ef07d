//! Recommendation generation — one snapshot in, one completion (or failure) out.
//!
//! Flow: render_prompt → backend.complete → text returned unmodified.
//! Backend faults never escape as errors: they become a `GenerationFailure`
//! that the view renders like any other result.

use std::fmt;

use tracing::{info, warn};

use crate::llm_client::CompletionBackend;
use crate::models::intake::IntakeSnapshot;
use crate::recommendation::prompts::render_prompt;

/// A failed generation, carried as data. Displays as the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    description: String,
}

impl GenerationFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The underlying fault's own description.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An error occurred: {}", self.description())
    }
}

/// Renders the snapshot, calls the backend once and returns its text as-is.
pub async fn generate_recommendation(
    backend: &dyn CompletionBackend,
    snapshot: &IntakeSnapshot,
) -> Result<String, GenerationFailure> {
    let prompt = render_prompt(snapshot);

    match backend.complete(&prompt).await {
        Ok(text) => {
            info!(
                "Generated recommendation for {} ({} chars)",
                snapshot.department().label(),
                text.len()
            );
            Ok(text)
        }
        Err(e) => {
            warn!(
                "Recommendation generation failed for {}: {e}",
                snapshot.department().label()
            );
            Err(GenerationFailure::new(e.to_string()))
        }
    }
}
