//! Research article use cases.

use crate::error::AppError;
use crate::infra::{column_text, get_connection, Db};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResearchArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub content: String,
    pub pdf_path: String,
}

/// All articles, newest first. `publish_date` is compared as text.
pub fn research_list(db: &Db) -> Result<Vec<ResearchArticleDto>, AppError> {
    let conn = get_connection(db)?;
    let mut stmt = conn.prepare(
        "SELECT id, title, author, publish_date, abstract, content, pdf_path FROM research_articles ORDER BY publish_date DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ResearchArticleDto {
            id: row.get(0)?,
            title: column_text(row, 1)?,
            author: column_text(row, 2)?,
            publish_date: column_text(row, 3)?,
            abstract_text: column_text(row, 4)?,
            content: column_text(row, 5)?,
            pdf_path: column_text(row, 6)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    log::debug!("research_list: {} rows", out.len());
    Ok(out)
}
