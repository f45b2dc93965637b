mod draft;
mod product;
mod variation;

pub use draft::ProductDraft;
pub use product::{
    ProductDescription, ProductType, TargetModel, VisualEmphasis, ENVIRONMENT_PRESETS,
};
pub use variation::{GeneratedVariation, PromptResponse};
