mod app_error;

pub use app_error::{AppError, GENERATION_MESSAGE, VALIDATION_MESSAGE};
