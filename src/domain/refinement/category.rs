//! Category inference and clarifying-question templates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KeywordRule, RuleTable};

const GOOD_PROMPT_EXAMPLE: &str = "How can I draft a legally sound employment contract that \
clearly defines job responsibilities, compensation, benefits, working hours, confidentiality, \
termination conditions, and compliance with labor laws?";

/// Topical category used to pick a clarifying question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementCategory {
    Employment,
    Property,
    Contract,
    Company,
    General,
}

const RULES: &[KeywordRule<RefinementCategory>] = &[
    KeywordRule::new(
        &["employment", "work", "job", "salary", "leave", "termination", "mom"],
        RefinementCategory::Employment,
    ),
    KeywordRule::new(
        &["property", "house", "hdb", "condo", "buy", "sell", "lease", "rent"],
        RefinementCategory::Property,
    ),
    KeywordRule::new(
        &["contract", "agreement", "sign", "terms", "breach", "void"],
        RefinementCategory::Contract,
    ),
    KeywordRule::new(
        &["company", "business", "acra", "director", "shareholder", "incorporation"],
        RefinementCategory::Company,
    ),
];

/// Category inference, in priority order.
pub const REFINEMENT_RULES: RuleTable<RefinementCategory> =
    RuleTable::new(RULES, RefinementCategory::General);

impl RefinementCategory {
    /// Infers the category of a question.
    pub fn infer(text: &str) -> Self {
        REFINEMENT_RULES.evaluate(text)
    }

    /// The clarifying question asked for this category.
    pub fn clarifying_question(&self) -> String {
        match self {
            Self::Employment => format!(
                "I understand you're asking about employment matters in Singapore. Let me refine \
                 your question: Are you specifically asking about [employment rights/termination \
                 procedures/leave entitlements/salary disputes] under the Employment Act and MOM \
                 guidelines? Please specify what your requirements are in detail for better \
                 results. An example prompt would be '{}'",
                GOOD_PROMPT_EXAMPLE
            ),
            Self::Property => "I see you're inquiring about property matters. Let me clarify: Are \
                 you asking about [HDB regulations/private property transactions/rental \
                 agreements/stamp duty requirements] under Singapore property law? Please confirm \
                 this refined question addresses your needs."
                .to_string(),
            Self::Contract => format!(
                "You're asking about contractual matters. To provide better guidance: Are you \
                 specifically interested in how to draft an employee contract for your company \
                 under Singapore contract law? Please provide more information so that I can \
                 draft a prompt for you. An example of a good prompt would be '{}'",
                GOOD_PROMPT_EXAMPLE
            ),
            Self::Company => "I understand you're asking about corporate matters. Let me refine: \
                 Are you specifically asking about [company incorporation/director \
                 duties/shareholder rights/ACRA compliance] under the Companies Act? Please \
                 confirm this captures your query."
                .to_string(),
            Self::General => "To provide you with the most accurate legal information, let me \
                 refine your question: Are you asking about [specific legal procedure/rights and \
                 obligations/compliance requirements/dispute resolution] in the context of \
                 Singapore law? Please confirm if this refinement addresses your query correctly."
                .to_string(),
        }
    }
}

/// Produces the clarifying question for a first-turn prompt.
pub fn refine_prompt(text: &str) -> String {
    RefinementCategory::infer(text).clarifying_question()
}
