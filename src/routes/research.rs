use super::{blocking, AppState};
use crate::app::{research_list, ResearchArticleDto};
use crate::error::AppError;
use axum::extract::State;
use axum::Json;

pub async fn research_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResearchArticleDto>>, AppError> {
    let articles = blocking(move || research_list(&state.db)).await?;
    Ok(Json(articles))
}
