//! Sensitive-data and citation-risk detection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Warning;
use crate::domain::foundation::contains_any;

/// Terms that indicate the user is relying on a statutory or case-law reference.
pub const CITATION_TERMS: &[&str] = &[
    "section",
    "act",
    "regulation",
    "statute",
    "precedent",
    "judgment",
    "ruling",
];

const CITATION_MESSAGE: &str =
    "Legal references detected - Always verify statutory citations and case law";

/// Categories of sensitive data the extractor looks for, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveDataKind {
    /// Six digits followed by a letter (NRIC-style national identifier).
    NationalId,
    Email,
    /// A run of eight or more digits.
    Phone,
    /// A "case no" / "suit no" court reference.
    CaseNumber,
}

impl SensitiveDataKind {
    /// All kinds in rule-declaration order.
    pub const ALL: [SensitiveDataKind; 4] = [
        SensitiveDataKind::NationalId,
        SensitiveDataKind::Email,
        SensitiveDataKind::Phone,
        SensitiveDataKind::CaseNumber,
    ];

    /// Human-readable warning text for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NationalId => "NRIC detected - Consider redacting personal identifiers",
            Self::Email => "Email address detected - Protect client confidentiality",
            Self::Phone => "Possible phone number detected - Consider privacy implications",
            Self::CaseNumber => "Case number detected - Verify if this should be shared",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::NationalId => &NATIONAL_ID,
            Self::Email => &EMAIL,
            Self::Phone => &PHONE,
            Self::CaseNumber => &CASE_NUMBER,
        }
    }

    /// Returns true if the text contains at least one match.
    pub fn is_present_in(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

// ASCII-only classes and boundaries: identifiers written directly after CJK
// or accented letters still sit on a boundary, and non-ASCII digits never count.
static NATIONAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)\b[0-9]{6}[a-z]\b").expect("valid national id regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").expect("valid email regex")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)\b[0-9]{8,}\b").expect("valid phone regex"));

static CASE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:case\s+no|suit\s+no)[\s:]?\S+").expect("valid case number regex")
});

/// Inspects text for sensitive data and unverified legal references.
///
/// Returns one high-severity warning per sensitive-data rule that matches
/// (presence only, never per occurrence), in rule order, followed by a single
/// medium-severity citation warning if any citation term appears. Total and
/// side-effect free.
pub fn detect_signals(text: &str) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = SensitiveDataKind::ALL
        .iter()
        .filter(|kind| kind.is_present_in(text))
        .map(|kind| Warning::sensitive(kind.message()))
        .collect();

    if contains_any(&text.to_lowercase(), CITATION_TERMS) {
        warnings.push(Warning::citation(CITATION_MESSAGE));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::{Severity, WarningKind};
    use proptest::prelude::*;

    fn messages(warnings: &[Warning]) -> Vec<&str> {
        warnings.iter().map(|w| w.message.as_str()).collect()
    }

    mod sensitive_data {
        use super::*;

        #[test]
        fn detects_national_id() {
            let warnings = detect_signals("my NRIC is 123456a");
            assert_eq!(messages(&warnings), vec![SensitiveDataKind::NationalId.message()]);
        }

        #[test]
        fn national_id_needs_word_boundary() {
            assert!(!SensitiveDataKind::NationalId.is_present_in("x1234567A"));
        }

        #[test]
        fn detects_email_case_insensitively() {
            assert!(SensitiveDataKind::Email.is_present_in("Mail JANE.DOE@EXAMPLE.COM now"));
        }

        #[test]
        fn multiple_emails_yield_one_warning() {
            let warnings = detect_signals("cc a@b.io and c@d.org and e@f.net");
            let emails = warnings
                .iter()
                .filter(|w| w.message == SensitiveDataKind::Email.message())
                .count();
            assert_eq!(emails, 1);
        }

        #[test]
        fn detects_phone_like_digit_runs() {
            assert!(SensitiveDataKind::Phone.is_present_in("call 91234567"));
            assert!(!SensitiveDataKind::Phone.is_present_in("call 9123456"));
        }

        #[test]
        fn detects_case_and_suit_numbers() {
            assert!(SensitiveDataKind::CaseNumber.is_present_in("Case No: HC/S 123/2023"));
            assert!(SensitiveDataKind::CaseNumber.is_present_in("suit no 42"));
            assert!(!SensitiveDataKind::CaseNumber.is_present_in("just in case"));
        }

        #[test]
        fn detects_identifiers_adjacent_to_cjk_text() {
            assert!(SensitiveDataKind::Phone.is_present_in("我的电话是91234567"));
            assert!(SensitiveDataKind::Email.is_present_in("邮箱tan@example.com"));
            assert!(SensitiveDataKind::NationalId.is_present_in("身份证123456A"));
            assert!(SensitiveDataKind::CaseNumber.is_present_in("案件case no 12"));
        }

        #[test]
        fn detects_identifiers_adjacent_to_accented_text() {
            assert!(SensitiveDataKind::Phone.is_present_in("téléphone:é91234567"));
            assert_eq!(detect_signals("numéro91234567").len(), 1);
        }

        #[test]
        fn ignores_non_ascii_digit_runs() {
            assert!(!SensitiveDataKind::Phone.is_present_in("call ٩١٢٣٤٥٦٧"));
            assert!(!SensitiveDataKind::NationalId.is_present_in("id ١٢٣٤٥٦A"));
            assert!(detect_signals("call ٩١٢٣٤٥٦٧").is_empty());
        }

        #[test]
        fn sensitive_warnings_are_high_severity() {
            let warnings = detect_signals("reach me at someone@example.com");
            assert!(warnings
                .iter()
                .all(|w| w.kind == WarningKind::Sensitive && w.severity == Severity::High));
        }
    }

    mod citations {
        use super::*;

        #[test]
        fn detects_citation_terms() {
            let warnings = detect_signals("What does the Employment Act say?");
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].kind, WarningKind::Citation);
            assert_eq!(warnings[0].severity, Severity::Medium);
        }

        #[test]
        fn citation_terms_match_as_substrings() {
            // "act" inside "contract" counts, as the vocabulary is matched by containment.
            assert_eq!(detect_signals("draft a contract").len(), 1);
        }

        #[test]
        fn no_warning_for_plain_question() {
            assert!(detect_signals("How do I get divorced?").is_empty());
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn sensitive_warnings_precede_citation_in_rule_order() {
            let text = "Suit no 77, per section 5, email x@y.com, phone 912345678, id 765432Z";
            let warnings = detect_signals(text);
            assert_eq!(
                messages(&warnings),
                vec![
                    SensitiveDataKind::NationalId.message(),
                    SensitiveDataKind::Email.message(),
                    SensitiveDataKind::Phone.message(),
                    SensitiveDataKind::CaseNumber.message(),
                    CITATION_MESSAGE,
                ]
            );
        }

        #[test]
        fn empty_text_yields_nothing() {
            assert!(detect_signals("").is_empty());
        }
    }

    proptest! {
        #[test]
        fn detection_is_idempotent(text in ".{0,200}") {
            prop_assert_eq!(detect_signals(&text), detect_signals(&text));
        }

        #[test]
        fn email_always_reported_exactly_once(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}",
            copies in 1usize..5,
        ) {
            let address = format!("{}@{}.com", local, domain);
            let text = vec![address; copies].join(" and ");
            let count = detect_signals(&text)
                .iter()
                .filter(|w| w.message == SensitiveDataKind::Email.message())
                .count();
            prop_assert_eq!(count, 1);
        }

        #[test]
        fn phone_after_cjk_prefix_is_flagged(
            prefix in "[\u{4e00}-\u{9fff}]{1,6}",
            digits in "[0-9]{8,12}",
        ) {
            let text = format!("{}{}", prefix, digits);
            prop_assert!(SensitiveDataKind::Phone.is_present_in(&text));
        }
    }
}
