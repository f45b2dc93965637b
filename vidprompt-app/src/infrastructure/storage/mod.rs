mod draft_repository;
mod key_value;

pub use draft_repository::{DraftRepository, DRAFT_KEY};
pub use key_value::{FileStore, KeyValueStore, MemoryStore};
