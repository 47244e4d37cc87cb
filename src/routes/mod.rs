//! HTTP handlers (DTO boundary) and router assembly.

mod guideline;
mod interaction;
mod pages;
mod quiz;
mod research;

use crate::error::AppError;
use crate::infra::Db;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Db,
    pub pdf_dir: PathBuf,
}

pub fn build_router(state: AppState) -> Router {
    let pdfs = pages::pdf_service(&state.pdf_dir);
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/api/research", get(research::research_handler))
        .route("/api/guidelines", get(guideline::guideline_handler))
        .route("/api/quiz", get(quiz::quiz_handler))
        .route("/api/track-interaction", post(interaction::track_handler))
        .nest_service("/pdfs", pdfs)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run blocking store work off the async executor.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}
