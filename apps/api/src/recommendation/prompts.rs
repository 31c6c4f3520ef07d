// Prompt text for the recommendation call.

use crate::models::intake::IntakeSnapshot;

/// Opening instructions: the advisory role and the requested output shape.
pub const ADVISOR_INSTRUCTIONS: &str = "\
You are an AI strategy consultant. Based on the following operational context, generate:
1. Three tailored AI or automation use cases with:
   - A short explanation of each
   - A score for ROI (1–5)
   - A score for implementation feasibility (1–5)
2. A 90-day AI Transformation Roadmap (Month 1, 2, 3)";

/// Closing formatting instruction.
pub const FORMAT_INSTRUCTION: &str = "Present results clearly using bullet points.";

/// Renders the recommendation prompt for one snapshot.
///
/// Fields are interpolated verbatim in a single pass: text that happens to
/// look like a placeholder is never expanded a second time.
pub fn render_prompt(snapshot: &IntakeSnapshot) -> String {
    format!(
        "{ADVISOR_INSTRUCTIONS}

Context:
- Department: {department}
- Pain Point: {pain_point}
- Data Used: {data_used}
- Task Frequency: {volume}
- Task Importance: {impact}

{FORMAT_INSTRUCTION}",
        department = snapshot.department().label(),
        pain_point = snapshot.pain_point(),
        data_used = snapshot.data_used(),
        volume = snapshot.volume().label(),
        impact = snapshot.impact().label(),
    )
}
