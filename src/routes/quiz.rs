use super::{blocking, AppState};
use crate::app::{quiz_list, QuizQuestionDto};
use crate::error::AppError;
use axum::extract::State;
use axum::Json;

pub async fn quiz_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestionDto>>, AppError> {
    let questions = blocking(move || quiz_list(&state.db)).await?;
    Ok(Json(questions))
}
