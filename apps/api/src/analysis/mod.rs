// Profile analysis: pure heuristics, no I/O and no LLM calls.
// Style and seniority are closed-form keyword scoring; insights feed prompts.

pub mod insights;
pub mod profile;
pub mod seniority;
pub mod style;
