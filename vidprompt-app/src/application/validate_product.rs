use crate::domain::ProductDescription;
use vidprompt_errors::AppError;

pub struct InputValidator;

impl InputValidator {
    /// Product name, features and environment must carry visible text.
    pub fn validate(product: &ProductDescription) -> Result<(), AppError> {
        let missing: Vec<&str> = [
            ("productName", &product.product_name),
            ("features", &product.features),
            ("environment", &product.environment),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
