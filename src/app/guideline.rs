//! Clinical guideline use cases.

use crate::error::AppError;
use crate::infra::{column_text, get_connection, Db};
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GuidelineCreateReq {
    pub title: String,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub publish_date: Option<String>,
    pub content: Option<String>,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidelineDto {
    pub id: i64,
    pub title: String,
    pub organization: String,
    pub category: String,
    pub publish_date: String,
    pub content: String,
    pub file_path: String,
}

const SELECT_COLUMNS: &str =
    "SELECT id, title, organization, category, publish_date, content, file_path FROM guidelines";

/// Guidelines newest first; a non-empty `category` restricts to exact matches.
pub fn guideline_list(db: &Db, category: Option<&str>) -> Result<Vec<GuidelineDto>, AppError> {
    let category = category.filter(|c| !c.is_empty());
    let conn = get_connection(db)?;
    let sql = match category {
        Some(_) => format!("{SELECT_COLUMNS} WHERE category = ?1 ORDER BY publish_date DESC"),
        None => format!("{SELECT_COLUMNS} ORDER BY publish_date DESC"),
    };
    let mut stmt = conn.prepare(&sql)?;
    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<GuidelineDto> {
        Ok(GuidelineDto {
            id: row.get(0)?,
            title: column_text(row, 1)?,
            organization: column_text(row, 2)?,
            category: column_text(row, 3)?,
            publish_date: column_text(row, 4)?,
            content: column_text(row, 5)?,
            file_path: column_text(row, 6)?,
        })
    };
    let rows = match category {
        Some(c) => stmt.query_map([c], map_row)?.collect::<Result<Vec<_>, _>>()?,
        None => stmt.query_map([], map_row)?.collect::<Result<Vec<_>, _>>()?,
    };
    log::debug!("guideline_list(category={:?}): {} rows", category, rows.len());
    Ok(rows)
}

/// Insert a guideline. Administration hook, not exposed over HTTP.
pub fn guideline_create(db: &Db, req: GuidelineCreateReq) -> Result<GuidelineDto, AppError> {
    let organization = req.organization.unwrap_or_default();
    let category = req.category.unwrap_or_default();
    let publish_date = req.publish_date.unwrap_or_default();
    let content = req.content.unwrap_or_default();
    let file_path = req.file_path.unwrap_or_default();

    let conn = get_connection(db)?;
    conn.execute(
        "INSERT INTO guidelines (title, organization, category, publish_date, content, file_path) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![&req.title, &organization, &category, &publish_date, &content, &file_path],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("guideline {} created in category {:?}", id, category);

    Ok(GuidelineDto {
        id,
        title: req.title,
        organization,
        category,
        publish_date,
        content,
        file_path,
    })
}
