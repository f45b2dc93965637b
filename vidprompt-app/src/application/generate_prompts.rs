use super::generation_client::GenerationClient;
use super::validate_product::InputValidator;
use crate::domain::{GeneratedVariation, ProductDescription};
use crate::prompt::AssembledPrompt;
use vidprompt_errors::AppError;

pub struct GeneratePrompts<C> {
    client: C,
}

impl<C: GenerationClient> GeneratePrompts<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        product: ProductDescription,
    ) -> Result<Vec<GeneratedVariation>, AppError> {
        InputValidator::validate(&product)?;

        let prompt = AssembledPrompt::build(&product);
        tracing::info!(
            product = %product.product_name,
            emphasis = %product.visual_emphasis,
            target = %product.target_model,
            "Requesting prompt variations"
        );

        let variations = self.client.generate(&prompt).await.inspect_err(|e| {
            tracing::error!("Prompt generation failed: {}", e);
        })?;

        if variations.is_empty() {
            return Err(AppError::GenerationFailed(
                "Model returned no variations".to_string(),
            ));
        }

        tracing::info!(count = variations.len(), "Prompt variations generated");
        Ok(variations)
    }
}
