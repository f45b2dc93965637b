#![recursion_limit = "256"]

mod routes;

use axum::{routing::post, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use vidprompt_app::AppContext;
use vidprompt_ui::pages::{GeneratePromptsFn, LoadDraftFn, ResetDraftFn, SaveDraftFn};
use vidprompt_ui::App;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GeneratePromptsFn>();
    server_fn::axum::register_explicit::<LoadDraftFn>();
    server_fn::axum::register_explicit::<SaveDraftFn>();
    server_fn::axum::register_explicit::<ResetDraftFn>();
    tracing::info!("Registered server functions: generate_prompts, load_draft, save_draft, reset_draft");

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .merge(routes::rest_router(app_context.clone()))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #0b0b0f;
            --surface: #15151c;
            --overlay: #26262f;
            --muted: #6b6b7b;
            --subtle: #a1a1b0;
            --text: #ececf1;
            --accent: #e11d48;
            --accent-soft: #fb7185;
            --gold: #f59e0b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        .container { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }
        .hero { text-align: center; padding: 2.5rem 0 2rem; }
        .hero__title { font-size: clamp(1.8rem, 4vw, 2.6rem); color: var(--accent-soft); font-weight: 800; margin-bottom: 0.5rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1rem; max-width: 560px; margin: 0 auto; }
        .home-layout { display: grid; gap: 1.5rem; }
        @media (min-width: 960px) { .home-layout { grid-template-columns: 380px 1fr; align-items: start; } }
        .panel { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.25rem; }
        .panel__header { display: flex; justify-content: space-between; align-items: flex-start; gap: 0.5rem; margin-bottom: 1rem; }
        .panel__title { font-size: 1.1rem; }
        .panel__reset { background: none; border: 1px solid var(--overlay); color: var(--subtle); border-radius: 6px; padding: 0.25rem 0.6rem; cursor: pointer; }
        .reset-confirm { background: var(--overlay); border-radius: 8px; padding: 0.75rem; font-size: 0.85rem; }
        .reset-confirm__text { margin-bottom: 0.5rem; }
        .reset-confirm__yes, .reset-confirm__no { border: none; border-radius: 6px; padding: 0.35rem 0.75rem; margin-right: 0.5rem; cursor: pointer; }
        .reset-confirm__yes { background: var(--accent); color: var(--text); }
        .reset-confirm__no { background: var(--muted); color: var(--text); }
        .product-form { display: flex; flex-direction: column; gap: 1rem; }
        .field { display: flex; flex-direction: column; gap: 0.4rem; }
        .field__label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--subtle); font-weight: 600; }
        .field__label--inline { display: flex; align-items: center; gap: 0.5rem; text-transform: none; font-size: 0.9rem; }
        .field__input {
            width: 100%; padding: 0.7rem 0.9rem; border: 1px solid var(--overlay);
            border-radius: 8px; background: var(--base); color: var(--text); font-size: 0.95rem;
        }
        .field__input:focus { outline: none; border-color: var(--accent); }
        .field__input--strong { font-weight: 600; }
        .field__input--area { min-height: 110px; resize: vertical; font-family: inherit; }
        .field__textarea { position: relative; }
        .field__counter { position: absolute; right: 0.6rem; bottom: 0.5rem; font-size: 0.7rem; color: var(--muted); }
        .toggle { display: grid; grid-template-columns: 1fr 1fr; gap: 0.4rem; background: var(--base); padding: 0.25rem; border-radius: 8px; }
        .toggle__option { border: none; border-radius: 6px; padding: 0.5rem; background: none; color: var(--subtle); cursor: pointer; font-weight: 600; }
        .toggle__option--active { background: var(--accent); color: var(--text); }
        .chips { display: flex; flex-wrap: wrap; gap: 0.35rem; }
        .chips__item { border: 1px solid var(--overlay); background: none; color: var(--subtle); border-radius: 999px; padding: 0.2rem 0.65rem; font-size: 0.75rem; cursor: pointer; }
        .chips__item:hover { border-color: var(--accent-soft); color: var(--text); }
        .product-form__submit {
            padding: 0.9rem 1.5rem; background: var(--accent); color: var(--text);
            border: none; border-radius: 8px; font-size: 1rem; font-weight: 700; cursor: pointer;
        }
        .product-form__submit:hover { opacity: 0.9; }
        .product-form__submit:disabled { background: var(--muted); cursor: wait; }
        .loading { display: flex; flex-direction: column; align-items: center; padding: 2rem; }
        .loading__spinner {
            width: 44px; height: 44px; border: 4px solid var(--overlay);
            border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        .loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
        .loading__skeleton { width: 100%; background: var(--surface); border-radius: 12px; padding: 1.25rem; margin-top: 1rem; }
        .loading__bar { height: 0.8rem; background: var(--overlay); border-radius: 4px; margin-bottom: 0.6rem; animation: pulse 1.4s ease-in-out infinite; }
        .loading__bar--title { width: 40%; height: 1.1rem; }
        .loading__bar--short { width: 65%; }
        @keyframes pulse { 50% { opacity: 0.4; } }
        .results { display: flex; flex-direction: column; gap: 1.25rem; }
        .card { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; overflow: hidden; }
        .card__header { display: flex; align-items: center; gap: 0.75rem; padding: 1rem 1.25rem; border-bottom: 1px solid var(--overlay); }
        .card__index { width: 2rem; height: 2rem; border-radius: 50%; background: var(--accent); display: grid; place-items: center; font-weight: 700; }
        .card__heading { flex: 1; }
        .card__kicker { font-size: 0.7rem; text-transform: uppercase; color: var(--muted); }
        .card__title { font-size: 1rem; }
        .card__strategy { font-size: 0.75rem; color: var(--gold); border: 1px solid var(--gold); border-radius: 999px; padding: 0.15rem 0.6rem; }
        .card__body { padding: 1rem 1.25rem; }
        .card__meta { display: flex; justify-content: space-between; margin-bottom: 0.5rem; font-size: 0.75rem; color: var(--subtle); }
        .card__badge { color: var(--accent-soft); }
        .card__editor { position: relative; }
        .card__copy {
            position: absolute; top: 0.75rem; right: 0.75rem; padding: 0.4rem 0.9rem; border-radius: 8px;
            border: 1px solid var(--overlay); background: var(--surface); color: var(--text); font-weight: 700; font-size: 0.75rem; cursor: pointer;
        }
        .card__copy--done { background: #059669; border-color: #047857; }
        .card__text {
            width: 100%; min-height: 260px; padding: 0.9rem; border: 1px solid var(--overlay); border-radius: 8px;
            background: var(--base); color: var(--text); font-family: ui-monospace, monospace; font-size: 0.85rem; line-height: 1.6; resize: vertical;
        }
        .card__hint { margin-top: 0.5rem; font-size: 0.75rem; color: var(--muted); }
        .empty { border: 2px dashed var(--overlay); border-radius: 12px; padding: 3rem 1.5rem; text-align: center; color: var(--subtle); }
        .empty__title { color: var(--text); margin-bottom: 0.5rem; }
        .error { background: #2a0f16; border: 1px solid var(--accent); border-radius: 8px; padding: 1.25rem; }
        .error__title { color: var(--accent-soft); font-weight: 700; margin-bottom: 0.5rem; }
        .error__message { color: #fecdd3; }
        .error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: var(--accent); color: var(--text); border: none; border-radius: 4px; cursor: pointer; }
        .footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.85rem; border-top: 1px solid var(--overlay); margin-top: 3rem; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🎬</text></svg>"/>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
