//! Outreach message generation: prompt construction, model calls, and the
//! deterministic post-processing (subjects, CTAs, reply-rate estimates).

pub mod generator;
pub mod handlers;
pub mod prompts;
