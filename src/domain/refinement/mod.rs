//! Refinement Engine.
//!
//! Turns a vague first question into a clarifying question, and proposes a
//! better-formed rewrite of the original prompt. Both share the same
//! employment-contract detection rule.

mod category;
mod improved_prompt;

pub use category::{refine_prompt, RefinementCategory, REFINEMENT_RULES};
pub use improved_prompt::{build_improved_prompt, is_employment_contract_request};
