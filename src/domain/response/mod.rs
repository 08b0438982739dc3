//! Response Generator.
//!
//! The assistant's reply is a fixed, disclaimer-bearing paragraph routed by
//! topic. No text is generated.

mod generator;

pub use generator::{generate_response, GeneratedResponse, Topic, TOPIC_RULES};
