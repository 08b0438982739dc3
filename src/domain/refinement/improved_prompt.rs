//! Improved-prompt construction.

use crate::domain::foundation::contains_any;
use crate::domain::prompt_quality::{PromptAnalysis, PromptProfile};

const CONTRACT_TERMS: &[&str] = &["contract"];
const EMPLOYEE_TERMS: &[&str] = &["employee"];

const EMPLOYMENT_CONTRACT_PROMPT: &str = "What are the essential clauses I need to include in a \
permanent employment contract under the Singapore Employment Act for a software developer role \
at my tech startup, including probation period, salary structure, and termination procedures?";

const JURISDICTION_SUFFIX: &str = " in Singapore under relevant Singapore law";

/// Returns true if the text asks about a contract for an employee.
///
/// This is the single detection rule shared by prompt grading and prompt
/// rewriting.
pub fn is_employment_contract_request(text: &str) -> bool {
    let lowered = text.to_lowercase();
    contains_any(&lowered, CONTRACT_TERMS) && contains_any(&lowered, EMPLOYEE_TERMS)
}

/// Suggests a better-formed version of `original`.
pub fn build_improved_prompt(original: &str, analysis: &PromptAnalysis) -> String {
    match analysis.profile {
        PromptProfile::EmploymentContract => EMPLOYMENT_CONTRACT_PROMPT.to_string(),
        PromptProfile::General => format!("{}{}", original, JURISDICTION_SUFFIX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt_quality::analyze_prompt;

    #[test]
    fn detects_contract_and_employee_together() {
        assert!(is_employment_contract_request("A Contract for my EMPLOYEE"));
        assert!(is_employment_contract_request("employees need contracts"));
        assert!(!is_employment_contract_request("contract law"));
        assert!(!is_employment_contract_request(""));
    }

    #[test]
    fn employment_contract_uses_literal_template() {
        let original = "How can I create a contract for my employee";
        let analysis = analyze_prompt(original);
        assert_eq!(
            build_improved_prompt(original, &analysis),
            EMPLOYMENT_CONTRACT_PROMPT
        );
    }

    #[test]
    fn other_prompts_get_jurisdiction_suffix() {
        let original = "Can my landlord keep my deposit?";
        let analysis = analyze_prompt(original);
        assert_eq!(
            build_improved_prompt(original, &analysis),
            "Can my landlord keep my deposit? in Singapore under relevant Singapore law"
        );
    }

    #[test]
    fn rewrite_agrees_with_grading_profile() {
        for text in ["contract for employee", "what is a will", ""] {
            let analysis = analyze_prompt(text);
            assert_eq!(
                analysis.profile == PromptProfile::EmploymentContract,
                is_employment_contract_request(text)
            );
        }
    }
}
