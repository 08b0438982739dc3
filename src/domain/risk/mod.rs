//! Risk Classifier.
//!
//! Assigns a query one of three tiers describing how much professional legal
//! review it likely needs.

mod assessment;

pub use assessment::{assess_risk, RiskAssessment, RiskLevel, RISK_RULES};
