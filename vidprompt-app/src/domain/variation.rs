use serde::{Deserialize, Serialize};
use vidprompt_errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVariation {
    pub title: String,
    /// The complete block, ready to paste into the video model.
    pub full_prompt: String,
    pub strategy: String,
}

impl GeneratedVariation {
    pub fn new(
        title: impl Into<String>,
        full_prompt: impl Into<String>,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            full_prompt: full_prompt.into(),
            strategy: strategy.into(),
        }
    }
}

/// Body shape the model is asked to return: `{ "prompts": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompts: Vec<GeneratedVariation>,
}

impl PromptResponse {
    /// Decodes the model's JSON text. Four variations are requested, but any
    /// non-empty list is accepted.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let response: PromptResponse = serde_json::from_str(text.trim())
            .map_err(|e| AppError::GenerationFailed(format!("Malformed response body: {}", e)))?;

        if response.prompts.is_empty() {
            return Err(AppError::GenerationFailed(
                "Response contained no variations".to_string(),
            ));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_variations() {
        let body = r#"{"prompts":[
            {"title":"Variação 1: Teste do Agachamento","fullPrompt":"CHARACTER: ...","strategy":"Prova social"},
            {"title":"Variação 2","fullPrompt":"CHARACTER: ...","strategy":"Urgência"}
        ]}"#;

        let response = PromptResponse::from_json(body).unwrap();
        assert_eq!(response.prompts.len(), 2);
        assert_eq!(response.prompts[0].title, "Variação 1: Teste do Agachamento");
        assert_eq!(response.prompts[1].strategy, "Urgência");
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = PromptResponse::from_json(r#"{"prompts":[]}"#).unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let body = r#"{"prompts":[{"title":"Sem estratégia","fullPrompt":"..."}]}"#;
        assert!(PromptResponse::from_json(body).is_err());
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(PromptResponse::from_json("Aqui estão seus prompts!").is_err());
        assert!(PromptResponse::from_json(r#"{"variations":[]}"#).is_err());
    }
}
