mod client;
mod types;

pub use client::GeminiClient;
pub use types::prompt_response_schema;
