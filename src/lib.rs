//! Legal Query Gate - screening and refinement for legal chat questions
//!
//! This crate screens user questions for sensitive data, grades prompt
//! quality, asks a clarifying question before the first answer, and
//! attaches a risk assessment to every substantive answer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
