//! Ordered keyword rule tables.
//!
//! Every keyword-routing decision in the pipeline (risk tier, refinement
//! category, response topic, educational tip) is expressed as a `RuleTable`:
//! an ordered list of keyword rules evaluated first-match-wins, plus a
//! fallback outcome. Matching is case-insensitive substring containment.

/// Returns true if `lowered` contains any of `keywords`.
///
/// `lowered` must already be lower-cased.
pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// A rule that fires when the text contains any of its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T: 'static> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], outcome: T) -> Self {
        Self { keywords, outcome }
    }

    /// Returns true if the already lower-cased text triggers this rule.
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }
}

/// An ordered, first-match-wins table of keyword rules with a fallback.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<T: 'static> {
    rules: &'static [KeywordRule<T>],
    fallback: T,
}

impl<T: Copy + 'static> RuleTable<T> {
    pub const fn new(rules: &'static [KeywordRule<T>], fallback: T) -> Self {
        Self { rules, fallback }
    }

    /// Returns the outcome of the first matching rule, or the fallback.
    pub fn evaluate(&self, text: &str) -> T {
        self.matching_rule(text)
            .map(|rule| rule.outcome)
            .unwrap_or(self.fallback)
    }

    /// Returns the first rule the text triggers, if any.
    pub fn matching_rule(&self, text: &str) -> Option<&'static KeywordRule<T>> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &'static [KeywordRule<T>] {
        self.rules
    }

    pub fn fallback(&self) -> T {
        self.fallback
    }
}
