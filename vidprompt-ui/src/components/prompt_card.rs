use leptos::prelude::*;
use std::time::Duration;
use vidprompt_app::domain::GeneratedVariation;

const COPIED_FEEDBACK: Duration = Duration::from_millis(2500);

fn copy_label(copied: bool) -> &'static str {
    if copied {
        "Copiado!"
    } else {
        "Copiar"
    }
}

#[cfg(feature = "hydrate")]
fn write_clipboard(text: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.navigator().clipboard().write_text(text);
        }
        None => tracing::warn!("No window available for clipboard"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn write_clipboard(_text: &str) {}

/// One generated variation. The prompt text is editable in place and the
/// copy button takes the edited text. Edits stay local to the card and are
/// replaced when a new variation arrives.
#[component]
pub fn PromptCard(index: usize, #[prop(into)] variation: Signal<GeneratedVariation>) -> impl IntoView {
    let initial = variation.with_untracked(|v| v.full_prompt.clone());
    let text = RwSignal::new(initial.clone());
    let copied = RwSignal::new(false);

    Effect::new(move |_| {
        text.set(variation.with(|v| v.full_prompt.clone()));
    });

    let on_copy = move |_| {
        write_clipboard(&text.get_untracked());
        copied.set(true);
        set_timeout(
            move || {
                let _ = copied.try_set(false);
            },
            COPIED_FEEDBACK,
        );
    };

    view! {
        <article class="card">
            <header class="card__header">
                <span class="card__index">{index + 1}</span>
                <div class="card__heading">
                    <span class="card__kicker">"Variação"</span>
                    <h3 class="card__title">{move || variation.with(|v| v.title.clone())}</h3>
                </div>
                <span class="card__strategy">{move || variation.with(|v| v.strategy.clone())}</span>
            </header>
            <div class="card__body">
                <div class="card__meta">
                    <span class="card__label">"Roteiro Unificado (PT-BR + Visual)"</span>
                    <span class="card__badge">"Veo3/Sora Ready"</span>
                </div>
                <div class="card__editor">
                    <textarea
                        class="card__text"
                        spellcheck="false"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    >
                        {initial}
                    </textarea>
                    <button
                        type="button"
                        class=move || if copied.get() { "card__copy card__copy--done" } else { "card__copy" }
                        on:click=on_copy
                    >
                        {move || copy_label(copied.get())}
                    </button>
                </div>
                <p class="card__hint">"Você pode editar o texto acima antes de copiar."</p>
            </div>
        </article>
    }
}
