use super::validate_product::InputValidator;
use crate::domain::{GeneratedVariation, ProductDescription};
use std::future::Future;
use vidprompt_errors::{AppError, GENERATION_MESSAGE};

/// Where the form is in its request lifecycle. Only one request can be
/// outstanding, and results never coexist with a pending request or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    InFlight,
    Succeeded(Vec<GeneratedVariation>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already outstanding; nothing was changed.
    Busy,
    /// Validation failed; the state now holds the reason.
    Invalid(AppError),
}

impl GenerationState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn variations(&self) -> &[GeneratedVariation] {
        match self {
            Self::Succeeded(variations) => variations,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Clears stale output, validates, then marks the request as in flight.
    pub fn begin(&mut self, product: &ProductDescription) -> Result<(), SubmitRejected> {
        if self.is_in_flight() {
            return Err(SubmitRejected::Busy);
        }

        *self = Self::Idle;

        if let Err(e) = InputValidator::validate(product) {
            *self = Self::Failed(e.user_message().to_string());
            return Err(SubmitRejected::Invalid(e));
        }

        *self = Self::InFlight;
        Ok(())
    }

    /// Settles an in-flight request. The error text must already be user-safe.
    pub fn finish(&mut self, result: Result<Vec<GeneratedVariation>, String>) {
        *self = match result {
            Ok(variations) if variations.is_empty() => Self::Failed(GENERATION_MESSAGE.to_string()),
            Ok(variations) => Self::Succeeded(variations),
            Err(message) => Self::Failed(message),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Runs one submission end to end against `generate`.
    pub async fn submit<F, Fut>(
        &mut self,
        product: ProductDescription,
        generate: F,
    ) -> Result<(), SubmitRejected>
    where
        F: FnOnce(ProductDescription) -> Fut,
        Fut: Future<Output = Result<Vec<GeneratedVariation>, AppError>>,
    {
        self.begin(&product)?;
        let result = generate(product).await;
        self.finish(result.map_err(|e| e.user_message().to_string()));
        Ok(())
    }
}
