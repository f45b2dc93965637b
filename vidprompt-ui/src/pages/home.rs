use crate::components::{ErrorDisplay, LoadingSpinner, ProductForm, PromptCard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use server_fn::ServerFnError;
use vidprompt_app::application::{DraftSync, GenerationState};
use vidprompt_app::domain::{GeneratedVariation, ProductDescription, ProductDraft, TargetModel};
use vidprompt_errors::GENERATION_MESSAGE;

#[server(GeneratePromptsFn, "/api", endpoint = "generate_prompts")]
pub async fn generate_prompts(
    product: ProductDescription,
) -> Result<Vec<GeneratedVariation>, ServerFnError> {
    use vidprompt_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.generate_prompts
        .execute(product)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(LoadDraftFn, "/api", endpoint = "load_draft")]
pub async fn load_draft() -> Result<ProductDraft, ServerFnError> {
    use vidprompt_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.drafts
        .load_draft()
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(SaveDraftFn, "/api", endpoint = "save_draft")]
pub async fn save_draft(draft: ProductDraft) -> Result<(), ServerFnError> {
    use vidprompt_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.drafts
        .save_draft(&draft)
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[server(ResetDraftFn, "/api", endpoint = "reset_draft")]
pub async fn reset_draft() -> Result<(), ServerFnError> {
    use vidprompt_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.drafts
        .clear_draft()
        .map_err(|e| ServerFnError::new(e.user_message()))
}

fn server_error_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message,
        other => {
            tracing::warn!("Generation request failed: {}", other);
            GENERATION_MESSAGE.to_string()
        }
    }
}

async fn persist_draft(draft: ProductDraft) {
    let saved = if draft.is_empty() {
        reset_draft().await
    } else {
        save_draft(draft).await
    };
    if let Err(e) = saved {
        tracing::warn!("Could not save draft: {}", e);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let draft = RwSignal::new(ProductDraft::default());
    let target_model = RwSignal::new(TargetModel::default());
    let state = RwSignal::new(GenerationState::Idle);
    let draft_loaded = RwSignal::new(false);

    // Restore the saved draft once, in the browser.
    Effect::new(move |_| {
        spawn_local(async move {
            match load_draft().await {
                Ok(saved) => draft.set(saved),
                Err(e) => tracing::warn!("Could not load draft: {}", e),
            }
            draft_loaded.set(true);
        });
    });

    // Persist on every change, one request at a time. An all-default draft
    // is stored as no record.
    let sync = StoredValue::new(DraftSync::default());
    Effect::new(move |_| {
        let current = draft.get();
        if !draft_loaded.get() {
            return;
        }
        if !sync.try_update_value(|s| s.push(current)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            while let Some(next) = sync.try_update_value(DraftSync::next).flatten() {
                persist_draft(next).await;
            }
        });
    });

    let is_loading = Signal::derive(move || state.with(GenerationState::is_in_flight));

    let on_submit = Callback::new(move |_: ()| {
        let product = draft
            .get_untracked()
            .to_description(target_model.get_untracked());

        if !matches!(state.try_update(|s| s.begin(&product)), Some(Ok(()))) {
            return;
        }

        spawn_local(async move {
            let result = generate_prompts(product)
                .await
                .map_err(server_error_message);
            state.update(|s| s.finish(result));
        });
    });

    let on_reset = Callback::new(move |_: ()| {
        draft.set(ProductDraft::default());
        state.update(GenerationState::reset);
    });

    view! {
        <div class="hero">
            <h1 class="hero__title">"Gerador de Prompts Veo3"</h1>
            <p class="hero__subtitle">
                "Roteiros cinematográficos para vídeos de produto no TikTok Shop"
            </p>
        </div>

        <div class="home-layout">
            <section class="home-layout__left">
                <ProductForm
                    draft=draft
                    target_model=target_model
                    is_loading=is_loading
                    on_submit=on_submit
                    on_reset=on_reset
                />
            </section>

            <section class="home-layout__right">
                {move || state.with(|current| match current {
                    GenerationState::Idle => view! { <EmptyState/> }.into_any(),
                    GenerationState::InFlight => view! { <LoadingSpinner/> }.into_any(),
                    GenerationState::Failed(message) => view! {
                        <ErrorDisplay message=message.clone() on_retry=on_submit/>
                    }.into_any(),
                    GenerationState::Succeeded(variations) => view! {
                        <div class="results">
                            {variations
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(index, variation)| view! {
                                    <PromptCard index=index variation=variation/>
                                })
                                .collect_view()}
                        </div>
                    }.into_any(),
                })}
            </section>
        </div>

        <footer class="footer">
            "© 2024 Gerador Veo3 @achadinhos_da_ellen. Todos os direitos reservados."
        </footer>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty">
            <h3 class="empty__title">"Área de Criação"</h3>
            <p class="empty__text">
                "Preencha os detalhes do seu produto na barra lateral para gerar 4 variações de prompts Veo3 profissionais com a marca "
                <b>"@achadinhos_da_ellen"</b>
                "."
            </p>
        </div>
    }
}
