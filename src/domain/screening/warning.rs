//! Warning value objects attached to user messages.

use serde::{Deserialize, Serialize};

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Personal or case-identifying data in the text.
    Sensitive,
    /// Legal references the user should verify against primary sources.
    Citation,
}

/// How prominently a warning must be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
}

/// A structured notice derived from a single user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    /// High-severity sensitive-data warning.
    pub fn sensitive(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Sensitive,
            severity: Severity::High,
            message: message.into(),
        }
    }

    /// Medium-severity citation-verification warning.
    pub fn citation(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Citation,
            severity: Severity::Medium,
            message: message.into(),
        }
    }

    pub fn is_high_severity(&self) -> bool {
        self.severity == Severity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_warnings_are_high_severity() {
        let warning = Warning::sensitive("Email address detected");
        assert_eq!(warning.kind, WarningKind::Sensitive);
        assert!(warning.is_high_severity());
    }

    #[test]
    fn citation_warnings_are_medium_severity() {
        let warning = Warning::citation("Legal references detected");
        assert_eq!(warning.kind, WarningKind::Citation);
        assert_eq!(warning.severity, Severity::Medium);
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let json = serde_json::to_value(Warning::citation("verify")).unwrap();
        assert_eq!(json["kind"], "citation");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["message"], "verify");
    }
}
