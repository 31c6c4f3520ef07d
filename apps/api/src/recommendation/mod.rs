// Recommendation Generator: prompt rendering and the single backend call.
// All backend calls go through llm_client, never reqwest directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
