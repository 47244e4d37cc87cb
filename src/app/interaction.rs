//! Usage telemetry.

use crate::error::AppError;
use crate::infra::{get_connection, Db};
use chrono::Local;
use rusqlite::params;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Client-reported event. Every field may be omitted.
#[derive(Debug, Deserialize)]
pub struct InteractionTrackReq {
    /// Defaults to "". Numbers and booleans are stored as text.
    #[serde(default, deserialize_with = "scalar_text")]
    pub page: Option<String>,
    /// Same coercion as `page`.
    #[serde(default, deserialize_with = "scalar_text")]
    pub action: Option<String>,
    /// Arbitrary JSON, stored as text. Defaults to `{}` only when absent;
    /// an explicit `null` is kept.
    #[serde(default = "empty_object")]
    pub additional_data: Value,
}

impl Default for InteractionTrackReq {
    fn default() -> Self {
        Self {
            page: None,
            action: None,
            additional_data: empty_object(),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

/// Any JSON scalar as text, the way SQLite stores it in a TEXT column.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(if b { "1" } else { "0" }.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or scalar, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionDto {
    pub id: i64,
    pub page: String,
    pub action: String,
    pub timestamp: String,
    pub additional_data: String,
}

/// Append one interaction row stamped with the current local time.
pub fn interaction_track(db: &Db, req: InteractionTrackReq) -> Result<InteractionDto, AppError> {
    let page = req.page.unwrap_or_default();
    let action = req.action.unwrap_or_default();
    let additional_data = serde_json::to_string(&req.additional_data)?;
    let timestamp = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();

    let conn = get_connection(db)?;
    conn.execute(
        "INSERT INTO user_interactions (page, action, timestamp, additional_data) VALUES (?1, ?2, ?3, ?4)",
        params![&page, &action, &timestamp, &additional_data],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("interaction {}: page={:?} action={:?}", id, page, action);

    Ok(InteractionDto {
        id,
        page,
        action,
        timestamp,
        additional_data,
    })
}
