use crate::application::GeneratePrompts;
use crate::config::AppConfig;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::storage::{DraftRepository, FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use vidprompt_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub generate_prompts: Arc<GeneratePrompts<GeminiClient>>,
    pub drafts: DraftRepository,
}

impl AppContext {
    pub fn new(generate_prompts: GeneratePrompts<GeminiClient>, drafts: DraftRepository) -> Self {
        Self {
            generate_prompts: Arc::new(generate_prompts),
            drafts,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = GeminiClient::new(&config.gemini)?;
        tracing::info!(
            model = %config.gemini.model,
            endpoint = client.endpoint(),
            "Using Gemini backend"
        );

        let store: Arc<dyn KeyValueStore> = match &config.draft_dir {
            Some(dir) => {
                tracing::info!("Persisting drafts under {}", dir.display());
                Arc::new(FileStore::new(dir)?)
            }
            None => {
                tracing::info!("DRAFT_DIR not set, drafts are kept in memory");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::new(
            GeneratePrompts::new(client),
            DraftRepository::new(store),
        ))
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(&AppConfig::from_env()?)
    }
}
