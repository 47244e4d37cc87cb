use super::{blocking, AppState};
use crate::app::{guideline_list, GuidelineDto};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GuidelineListQuery {
    pub category: Option<String>,
}

pub async fn guideline_handler(
    State(state): State<AppState>,
    Query(query): Query<GuidelineListQuery>,
) -> Result<Json<Vec<GuidelineDto>>, AppError> {
    let guidelines =
        blocking(move || guideline_list(&state.db, query.category.as_deref())).await?;
    Ok(Json(guidelines))
}
