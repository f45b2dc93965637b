use leptos::prelude::*;
use vidprompt_app::domain::{
    ProductDraft, ProductType, TargetModel, VisualEmphasis, ENVIRONMENT_PRESETS,
};

#[component]
pub fn ProductForm(
    draft: RwSignal<ProductDraft>,
    target_model: RwSignal<TargetModel>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let confirming_reset = RwSignal::new(false);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !is_loading.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <div class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Configuração do Produto"</h2>
                <Show
                    when=move || confirming_reset.get()
                    fallback=move || view! {
                        <button
                            type="button"
                            class="panel__reset"
                            title="Reiniciar / Limpar Tudo"
                            on:click=move |_| confirming_reset.set(true)
                        >
                            "↺"
                        </button>
                    }
                >
                    <div class="reset-confirm">
                        <p class="reset-confirm__text">
                            "Tem certeza que deseja limpar todos os campos e começar um novo produto?"
                        </p>
                        <button
                            type="button"
                            class="reset-confirm__yes"
                            on:click=move |_| {
                                confirming_reset.set(false);
                                on_reset.run(());
                            }
                        >
                            "Sim, limpar"
                        </button>
                        <button
                            type="button"
                            class="reset-confirm__no"
                            on:click=move |_| confirming_reset.set(false)
                        >
                            "Cancelar"
                        </button>
                    </div>
                </Show>
            </div>

            <form class="product-form" on:submit=on_form_submit>
                <div class="field">
                    <span class="field__label">"Tipo de Produto"</span>
                    <div class="toggle">
                        {ProductType::ALL.into_iter().map(|kind| view! {
                            <button
                                type="button"
                                class=move || if draft.with(|d| d.product_type == kind) {
                                    "toggle__option toggle__option--active"
                                } else {
                                    "toggle__option"
                                }
                                on:click=move |_| draft.update(|d| d.product_type = kind)
                            >
                                {kind.menu_label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                <div class="field">
                    <span class="field__label">"Foco Visual (Câmera)"</span>
                    <select
                        class="field__input"
                        prop:value=move || draft.with(|d| d.visual_emphasis.label())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.visual_emphasis = VisualEmphasis::from_label(&value));
                        }
                    >
                        {VisualEmphasis::ALL.into_iter().map(|emphasis| view! {
                            <option value=emphasis.label()>{emphasis.menu_label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <span class="field__label">"Ambiente / Cenário"</span>
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Onde a modelo está?"
                        prop:value=move || draft.with(|d| d.environment.clone())
                        on:input=move |ev| draft.update(|d| d.environment = event_target_value(&ev))
                    />
                    <div class="chips">
                        {ENVIRONMENT_PRESETS.iter().map(|preset| view! {
                            <button
                                type="button"
                                class="chips__item"
                                on:click=move |_| draft.update(|d| d.environment = preset.to_string())
                            >
                                {*preset}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                <div class="field">
                    <span class="field__label">"Detalhes"</span>
                    <input
                        type="text"
                        class="field__input field__input--strong"
                        placeholder="Nome do Produto"
                        prop:value=move || draft.with(|d| d.product_name.clone())
                        on:input=move |ev| draft.update(|d| d.product_name = event_target_value(&ev))
                    />
                    <div class="field__textarea">
                        <textarea
                            class="field__input field__input--area"
                            placeholder="Características: Cor, material, benefícios, para que serve..."
                            prop:value=move || draft.with(|d| d.features.clone())
                            on:input=move |ev| draft.update(|d| d.features = event_target_value(&ev))
                        ></textarea>
                        <span class="field__counter">
                            {move || draft.with(|d| d.features.chars().count())} " chars"
                        </span>
                    </div>
                </div>

                <div class="field field--price">
                    <label class="field__label field__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.has_price)
                            on:change=move |ev| draft.update(|d| d.has_price = event_target_checked(&ev))
                        />
                        "Incluir Preço?"
                    </label>
                    <Show when=move || draft.with(|d| d.has_price)>
                        <input
                            type="text"
                            class="field__input"
                            placeholder="Ex: R$ 49,90"
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </Show>
                </div>

                <div class="field">
                    <span class="field__label">"Modelo de Vídeo"</span>
                    <select
                        class="field__input"
                        prop:value=move || target_model.get().label()
                        on:change=move |ev| target_model.set(TargetModel::from_label(&event_target_value(&ev)))
                    >
                        {TargetModel::ALL.into_iter().map(|model| view! {
                            <option value=model.label()>{model.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    class="product-form__submit"
                    prop:disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Criando Roteiros Pro..." } else { "Gerar Prompts Mágicos" }}
                </button>
            </form>
        </div>
    }
}
