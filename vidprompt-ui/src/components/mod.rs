mod error_display;
mod loading_spinner;
mod product_form;
mod prompt_card;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use product_form::ProductForm;
pub use prompt_card::PromptCard;
