//! Résumé analysis — advisory defaults for the profile form.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{DOCUMENT_PROMPT_TEMPLATE, DOCUMENT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::question::Difficulty;
use crate::roles::RoleCatalog;

/// Suggested interview settings derived from an uploaded résumé.
/// All fields are optional defaults the candidate can override or ignore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSuggestions {
    pub suggested_role: Option<String>,
    pub suggested_difficulty: Option<Difficulty>,
    pub extracted_name: Option<String>,
}

/// Runs the résumé through the LLM and sanitizes the result against the
/// role catalog. Callers treat any error as "no suggestions".
pub async fn analyze_document(
    llm: &LlmClient,
    catalog: &RoleCatalog,
    text: &str,
) -> Result<ProfileSuggestions, AppError> {
    let role_names = catalog
        .roles()
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let system = DOCUMENT_SYSTEM.replace("{json_only}", JSON_ONLY_INSTRUCTION);
    let prompt = DOCUMENT_PROMPT_TEMPLATE
        .replace("{roles}", &role_names)
        .replace("{document}", text);

    let suggestions: ProfileSuggestions = llm
        .call_json(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("document analysis failed: {e}")))?;

    Ok(sanitize(suggestions, catalog))
}

/// Drops a suggested role the catalog does not know. The model is told to
/// copy from the list, but its output is not trusted.
fn sanitize(mut suggestions: ProfileSuggestions, catalog: &RoleCatalog) -> ProfileSuggestions {
    let unknown = suggestions
        .suggested_role
        .as_deref()
        .is_some_and(|role| !catalog.contains(role));
    if unknown {
        suggestions.suggested_role = None;
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_deserialize_with_nulls() {
        let json = r#"{
            "suggested_role": null,
            "suggested_difficulty": "Hard",
            "extracted_name": "Jane Doe"
        }"#;
        let s: ProfileSuggestions = serde_json::from_str(json).unwrap();
        assert!(s.suggested_role.is_none());
        assert_eq!(s.suggested_difficulty, Some(Difficulty::Hard));
        assert_eq!(s.extracted_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_sanitize_drops_unknown_role() {
        let catalog = RoleCatalog::builtin();
        let s = sanitize(
            ProfileSuggestions {
                suggested_role: Some("Wizard".to_string()),
                suggested_difficulty: Some(Difficulty::Easy),
                extracted_name: None,
            },
            &catalog,
        );
        assert!(s.suggested_role.is_none());
        // other fields survive
        assert_eq!(s.suggested_difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_sanitize_keeps_catalog_role() {
        let catalog = RoleCatalog::builtin();
        let s = sanitize(
            ProfileSuggestions {
                suggested_role: Some("Backend Developer".to_string()),
                suggested_difficulty: None,
                extracted_name: None,
            },
            &catalog,
        );
        assert_eq!(s.suggested_role.as_deref(), Some("Backend Developer"));
    }
}
