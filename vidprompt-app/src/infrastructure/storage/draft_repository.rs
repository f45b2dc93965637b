use super::key_value::KeyValueStore;
use crate::domain::ProductDraft;
use std::sync::Arc;
use vidprompt_errors::AppError;

pub const DRAFT_KEY: &str = "veo3_workspace";

#[derive(Clone)]
pub struct DraftRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl DraftRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: DRAFT_KEY.to_string(),
        }
    }

    /// Missing or unreadable records load as an empty draft.
    pub fn load_draft(&self) -> Result<ProductDraft, AppError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(ProductDraft::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(ProductDraft::from_stored(&value)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable draft record: {}", e);
                Ok(ProductDraft::default())
            }
        }
    }

    pub fn save_draft(&self, draft: &ProductDraft) -> Result<(), AppError> {
        let raw = serde_json::to_string(draft)
            .map_err(|e| AppError::Internal(format!("Cannot encode draft: {}", e)))?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear_draft(&self) -> Result<(), AppError> {
        self.store.remove(&self.key)?;
        tracing::info!("Draft cleared");
        Ok(())
    }
}
