use crate::domain::GeneratedVariation;
use crate::prompt::AssembledPrompt;
use std::future::Future;
use vidprompt_errors::AppError;

/// Remote model that turns an assembled prompt into variations.
///
/// Implementations ask for the `{ prompts: [...] }` response shape and report
/// every failure as [`AppError::GenerationFailed`].
pub trait GenerationClient: Send + Sync {
    fn generate(
        &self,
        prompt: &AssembledPrompt,
    ) -> impl Future<Output = Result<Vec<GeneratedVariation>, AppError>> + Send;
}
