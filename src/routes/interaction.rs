use super::{blocking, AppState};
use crate::app::{interaction_track, InteractionTrackReq};
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TrackResp {
    pub status: &'static str,
}

/// Body is decoded here rather than via `Json` so that a missing
/// content-type is tolerated and bad payloads get our error shape.
pub async fn track_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrackResp>, AppError> {
    let req = parse_track_req(&body)?;
    blocking(move || interaction_track(&state.db, req)).await?;
    Ok(Json(TrackResp { status: "success" }))
}

fn parse_track_req(body: &[u8]) -> Result<InteractionTrackReq, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
    if !value.is_object() {
        return Err(AppError::MalformedPayload("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::MalformedPayload(e.to_string()))
}
