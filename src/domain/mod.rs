//! Domain layer containing the analysis pipeline and conversation rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, rule tables)
//! - `screening` - Sensitive-data and citation-risk detection
//! - `prompt_quality` - Prompt grading and surfacing rule
//! - `risk` - Three-tier risk classification
//! - `refinement` - Clarifying questions and improved prompts
//! - `response` - Topic-routed canned replies
//! - `guidance` - Educational tips
//! - `conversation` - Transcript, phase state machine, and session state
//!
//! Everything except `conversation` is a pure function of the input text.

pub mod conversation;
pub mod foundation;
pub mod guidance;
pub mod prompt_quality;
pub mod refinement;
pub mod response;
pub mod risk;
pub mod screening;
