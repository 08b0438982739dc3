//! Topic-specific reminders about the limits of AI legal assistance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KeywordRule, RuleTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Contract,
    Litigation,
    Compliance,
}

/// A short educational notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalTip {
    pub kind: TipKind,
    pub title: String,
    pub content: String,
}

impl From<TipKind> for EducationalTip {
    fn from(kind: TipKind) -> Self {
        let (title, content) = match kind {
            TipKind::Contract => (
                "Contract Review Tips",
                "AI can help identify standard clauses but cannot replace professional review \
                 for complex agreements. Always verify jurisdiction-specific requirements.",
            ),
            TipKind::Litigation => (
                "Litigation Support",
                "AI can assist with research but cannot provide strategic litigation advice. \
                 Court procedures in Singapore require qualified legal representation.",
            ),
            TipKind::Compliance => (
                "Regulatory Compliance",
                "Singapore regulations change frequently. AI outputs should be cross-referenced \
                 with current MAS, ACRA, or relevant authority guidelines.",
            ),
        };
        Self {
            kind,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

const RULES: &[KeywordRule<Option<TipKind>>] = &[
    KeywordRule::new(&["contract"], Some(TipKind::Contract)),
    KeywordRule::new(&["court", "litigation"], Some(TipKind::Litigation)),
    KeywordRule::new(&["compliance", "regulation"], Some(TipKind::Compliance)),
];

const TIP_RULES: RuleTable<Option<TipKind>> = RuleTable::new(RULES, None);

/// Picks the tip for a question, if any applies.
pub fn educational_tip(text: &str) -> Option<EducationalTip> {
    TIP_RULES.evaluate(text).map(EducationalTip::from)
}
