//! Prompt Quality Analyzer.

use serde::{Deserialize, Serialize};

use super::ScoreBand;
use crate::domain::foundation::Percentage;
use crate::domain::refinement::{build_improved_prompt, is_employment_contract_request};

/// Overall score below which the analysis must be shown to the user.
pub const SURFACE_THRESHOLD: u8 = 70;

/// Which fixed scoring profile produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptProfile {
    /// The text asks about a contract for an employee.
    EmploymentContract,
    General,
}

impl PromptProfile {
    /// Detects the profile for a piece of text.
    pub fn detect(text: &str) -> Self {
        if is_employment_contract_request(text) {
            PromptProfile::EmploymentContract
        } else {
            PromptProfile::General
        }
    }
}

/// Graded breakdown of how well-formed a question is, plus a suggested rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub profile: PromptProfile,
    pub clarity_score: Percentage,
    pub specificity_score: Percentage,
    pub jurisdiction_score: Percentage,
    pub context_score: Percentage,
    pub overall_score: Percentage,
    pub suggestions: Vec<String>,
    /// Concrete phrasing changes, finer grained than `suggestions`.
    pub improvements: Vec<String>,
    pub improved_prompt_text: String,
}

impl PromptAnalysis {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// Per-dimension scores in display order.
    pub fn dimension_scores(&self) -> [(&'static str, Percentage); 4] {
        [
            ("Clarity", self.clarity_score),
            ("Specificity", self.specificity_score),
            ("Jurisdiction", self.jurisdiction_score),
            ("Context", self.context_score),
        ]
    }
}

struct ScoreProfile {
    clarity: u8,
    specificity: u8,
    jurisdiction: u8,
    context: u8,
    overall: u8,
    suggestions: &'static [&'static str],
    improvements: &'static [&'static str],
}

const EMPLOYMENT_CONTRACT_PROFILE: ScoreProfile = ScoreProfile {
    clarity: 65,
    specificity: 35,
    jurisdiction: 15,
    context: 25,
    overall: 35,
    suggestions: &[
        "Specify the type of employment contract (permanent, temporary, part-time)",
        "Include Singapore jurisdiction and Employment Act requirements",
        "Provide context about your business size and industry",
        "Mention specific clauses you need help with (salary, benefits, termination)",
    ],
    improvements: &[
        "Instead of 'contract for employee', try 'employment contract under Singapore Employment Act'",
        "Add business context: 'for my tech startup' or 'for my retail business'",
        "Specify contract type: 'permanent employment contract' vs 'fixed-term contract'",
    ],
};

const GENERAL_PROFILE: ScoreProfile = ScoreProfile {
    clarity: 50,
    specificity: 45,
    jurisdiction: 30,
    context: 40,
    overall: 40,
    suggestions: &["Be more specific about your legal question"],
    improvements: &["Add more context and specify Singapore jurisdiction"],
};

fn to_owned_all(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Grades a prompt. Pure function of the text.
pub fn analyze_prompt(text: &str) -> PromptAnalysis {
    let profile = PromptProfile::detect(text);
    let scores = match profile {
        PromptProfile::EmploymentContract => &EMPLOYMENT_CONTRACT_PROFILE,
        PromptProfile::General => &GENERAL_PROFILE,
    };

    let mut analysis = PromptAnalysis {
        profile,
        clarity_score: Percentage::new(scores.clarity),
        specificity_score: Percentage::new(scores.specificity),
        jurisdiction_score: Percentage::new(scores.jurisdiction),
        context_score: Percentage::new(scores.context),
        overall_score: Percentage::new(scores.overall),
        suggestions: to_owned_all(scores.suggestions),
        improvements: to_owned_all(scores.improvements),
        improved_prompt_text: String::new(),
    };
    analysis.improved_prompt_text = build_improved_prompt(text, &analysis);
    analysis
}

/// Returns true if the caller must show the analysis alongside the reply.
pub fn should_surface(analysis: &PromptAnalysis) -> bool {
    analysis.overall_score.value() < SURFACE_THRESHOLD
        || analysis.profile == PromptProfile::EmploymentContract
}
