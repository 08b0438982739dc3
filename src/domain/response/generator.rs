//! Topic routing and canned responses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KeywordRule, RuleTable};

/// Topic a reply was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Contract,
    Property,
    Employment,
    General,
}

impl Topic {
    pub fn response_text(&self) -> &'static str {
        match self {
            Topic::Contract => {
                "For contract-related queries in Singapore, I can provide general information \
                 about standard terms and structures. However, specific contract review requires \
                 professional legal expertise. Would you like information about general contract \
                 principles under Singapore law?"
            }
            Topic::Property => {
                "Property law in Singapore involves complex regulations including the Residential \
                 Property Act and stamp duty requirements. I can share general information, but \
                 property transactions should always involve qualified conveyancing lawyers."
            }
            Topic::Employment => {
                "Singapore employment law is governed by the Employment Act and MOM guidelines. \
                 While I can provide general information about employment rights, specific cases \
                 require professional assessment."
            }
            Topic::General => {
                "I understand you're seeking legal information. Please note that I'm an AI \
                 assistant and cannot provide legal advice. For matters requiring professional \
                 judgment, please consult a qualified Singapore lawyer. How can I help you with \
                 general legal information today?"
            }
        }
    }
}

const RULES: &[KeywordRule<Topic>] = &[
    KeywordRule::new(&["contract"], Topic::Contract),
    KeywordRule::new(&["property", "hdb"], Topic::Property),
    KeywordRule::new(&["employment", "work"], Topic::Employment),
];

/// Topic routing, in priority order.
pub const TOPIC_RULES: RuleTable<Topic> = RuleTable::new(RULES, Topic::General);

/// A routed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub response_text: String,
    pub topic: Topic,
}

/// Routes the text to a topic and returns its fixed reply.
pub fn generate_response(text: &str) -> GeneratedResponse {
    let topic = TOPIC_RULES.evaluate(text);
    GeneratedResponse {
        response_text: topic.response_text().to_string(),
        topic,
    }
}
