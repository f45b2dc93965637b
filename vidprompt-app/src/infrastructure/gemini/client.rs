use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::application::GenerationClient;
use crate::config::GeminiConfig;
use crate::domain::{GeneratedVariation, PromptResponse};
use crate::prompt::AssembledPrompt;
use std::future::Future;
use std::time::Duration;
use vidprompt_errors::AppError;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.api_url.as_str().trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, prompt: &AssembledPrompt) -> Result<Vec<GeneratedVariation>, AppError> {
        let request = GenerateContentRequest::new(
            prompt.system_instruction.clone(),
            prompt.task_instruction.clone(),
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::GenerationFailed(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        if let Some(reason) = completion.block_reason() {
            tracing::warn!("Gemini blocked the prompt: {}", reason);
            return Err(AppError::GenerationFailed(format!("Prompt blocked: {}", reason)));
        }

        let text = completion
            .first_text()
            .ok_or_else(|| AppError::GenerationFailed("No response from AI".to_string()))?;

        PromptResponse::from_json(&text).map(|r| r.prompts)
    }
}

impl GenerationClient for GeminiClient {
    fn generate(
        &self,
        prompt: &AssembledPrompt,
    ) -> impl Future<Output = Result<Vec<GeneratedVariation>, AppError>> + Send {
        self.request(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductDescription;
    use serde_json::json;
    use url::Url;

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &mockito::Server) -> GeminiClient {
        let url = Url::parse(&format!("{}/v1beta/", server.url())).unwrap();
        GeminiClient::new(&GeminiConfig::new("test-key", url)).unwrap()
    }

    fn prompt() -> AssembledPrompt {
        AssembledPrompt::build(&ProductDescription::new(
            "Legging Suplex",
            "Tecido premium",
            "Academia Moderna",
        ))
    }

    fn candidate_body(text: &str) -> String {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    fn four_prompts() -> String {
        let prompts: Vec<_> = (1..=4)
            .map(|i| {
                json!({
                    "title": format!("Variação {}", i),
                    "fullPrompt": "CHARACTER:\n...",
                    "strategy": "Prova de qualidade"
                })
            })
            .collect();
        json!({ "prompts": prompts }).to_string()
    }

    #[test]
    fn test_endpoint_format() {
        let url = Url::parse("https://example.test/v1beta").unwrap();
        let mut config = GeminiConfig::new("k", url);
        config.model = "gemini-2.5-pro".to_string();
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header(API_KEY_HEADER, "test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(&four_prompts()))
            .create_async()
            .await;

        let variations = client_for(&server).generate(&prompt()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(variations.len(), 4);
        assert_eq!(variations[0].title, "Variação 1");
    }

    #[tokio::test]
    async fn test_generate_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("internal")
            .create_async()
            .await;

        let err = client_for(&server).generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn test_generate_malformed_model_output() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body("Claro! Aqui estão 4 prompts..."))
            .create_async()
            .await;

        let err = client_for(&server).generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn test_generate_blocked_prompt() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string())
            .create_async()
            .await;

        let err = client_for(&server).generate(&prompt()).await.unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_generate_non_json_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        assert!(client_for(&server).generate(&prompt()).await.is_err());
    }
}
