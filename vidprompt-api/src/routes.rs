use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use vidprompt_app::domain::{ProductDescription, ProductDraft, PromptResponse};
use vidprompt_app::AppContext;
use vidprompt_errors::AppError;

/// JSON surface for clients that do not use the Leptos page.
pub fn rest_router<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/v1/prompts", post(create_prompts))
        .route(
            "/v1/draft",
            get(get_draft).put(put_draft).delete(delete_draft),
        )
        .with_state(ctx)
}

async fn create_prompts(
    State(ctx): State<AppContext>,
    Json(product): Json<ProductDescription>,
) -> Result<Json<PromptResponse>, AppError> {
    let prompts = ctx.generate_prompts.execute(product).await?;
    Ok(Json(PromptResponse { prompts }))
}

async fn get_draft(State(ctx): State<AppContext>) -> Result<Json<ProductDraft>, AppError> {
    Ok(Json(ctx.drafts.load_draft()?))
}

async fn put_draft(
    State(ctx): State<AppContext>,
    Json(record): Json<Value>,
) -> Result<StatusCode, AppError> {
    ctx.drafts.save_draft(&ProductDraft::from_stored(&record))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_draft(State(ctx): State<AppContext>) -> Result<StatusCode, AppError> {
    ctx.drafts.clear_draft()?;
    Ok(StatusCode::NO_CONTENT)
}
