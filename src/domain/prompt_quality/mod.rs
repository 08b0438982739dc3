//! Prompt quality grading.
//!
//! Scores how well-formed a legal question is along four dimensions and
//! proposes a better-formed rewrite. This is a graded-feedback heuristic with
//! two fixed profiles, not a language model.

mod analyzer;
mod score_band;

pub use analyzer::{analyze_prompt, should_surface, PromptAnalysis, PromptProfile, SURFACE_THRESHOLD};
pub use score_band::ScoreBand;
