use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__text">"Criando Roteiros Pro..."</p>
            {(0..2).map(|_| view! {
                <div class="loading__skeleton">
                    <div class="loading__bar loading__bar--title"></div>
                    <div class="loading__bar"></div>
                    <div class="loading__bar loading__bar--short"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
