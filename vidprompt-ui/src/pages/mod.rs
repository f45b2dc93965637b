mod home;

pub use home::{
    generate_prompts, load_draft, reset_draft, save_draft, GeneratePromptsFn, HomePage,
    LoadDraftFn, ResetDraftFn, SaveDraftFn,
};
