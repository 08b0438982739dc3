//! Keyword-tiered risk assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KeywordRule, RuleTable};

/// How much professional review a query likely needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn title(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk Area",
            RiskLevel::Medium => "Medium Risk Area",
            RiskLevel::Low => "General Information",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "This involves complex legal matters that require immediate professional consultation."
            }
            RiskLevel::Medium => "This requires professional review for proper implementation.",
            RiskLevel::Low => "This is general legal information for educational purposes.",
        }
    }

    pub fn recommended_actions(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "Consult a qualified Singapore lawyer immediately",
                "Do not take any action without legal advice",
                "Preserve all relevant documents",
                "Consider time-sensitive legal deadlines",
            ],
            RiskLevel::Medium => &[
                "Schedule consultation with a lawyer",
                "Review all terms carefully before proceeding",
                "Verify compliance with Singapore regulations",
                "Consider getting a second opinion",
            ],
            RiskLevel::Low => &[
                "Use this as background information only",
                "Cross-reference with official sources",
                "Consult a lawyer if specific issues arise",
                "Stay updated on law changes",
            ],
        }
    }
}

const RULES: &[KeywordRule<RiskLevel>] = &[
    KeywordRule::new(
        &[
            "court",
            "litigation",
            "criminal",
            "prosecution",
            "lawsuit",
            "sue",
            "breach",
            "liable",
            "damages",
        ],
        RiskLevel::High,
    ),
    KeywordRule::new(
        &[
            "contract",
            "agreement",
            "dispute",
            "compliance",
            "penalty",
            "fine",
            "violation",
        ],
        RiskLevel::Medium,
    ),
    KeywordRule::new(
        &["information", "general", "understand", "explain", "overview", "basics"],
        RiskLevel::Low,
    ),
];

/// Risk tiers in priority order; anything unmatched is low.
pub const RISK_RULES: RuleTable<RiskLevel> = RuleTable::new(RULES, RiskLevel::Low);

/// Three-tier classification with guidance for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub title: String,
    pub summary: String,
    pub recommended_actions: Vec<String>,
}

impl From<RiskLevel> for RiskAssessment {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            title: level.title().to_string(),
            summary: level.summary().to_string(),
            recommended_actions: level
                .recommended_actions()
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

/// Classifies a query by keyword tier. Total and pure.
pub fn assess_risk(text: &str) -> RiskAssessment {
    RISK_RULES.evaluate(text).into()
}
