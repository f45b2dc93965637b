mod draft_sync;
mod generation_client;
mod submission;
mod validate_product;

#[cfg(feature = "ssr")]
mod generate_prompts;

pub use draft_sync::DraftSync;
pub use generation_client::GenerationClient;
pub use submission::{GenerationState, SubmitRejected};
pub use validate_product::InputValidator;

#[cfg(feature = "ssr")]
pub use generate_prompts::GeneratePrompts;
