//! Quiz question use cases.

use crate::error::AppError;
use crate::infra::{column_text, get_connection, Db};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionDto {
    pub id: i64,
    pub question: String,
    pub options: [String; 4],
    /// 1-based index into `options`, echoed as stored.
    pub correct_option: Option<i64>,
}

pub fn quiz_list(db: &Db) -> Result<Vec<QuizQuestionDto>, AppError> {
    let conn = get_connection(db)?;
    let mut stmt = conn.prepare(
        "SELECT id, question, option1, option2, option3, option4, correct_option FROM quiz_questions ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(QuizQuestionDto {
            id: row.get(0)?,
            question: column_text(row, 1)?,
            options: [
                column_text(row, 2)?,
                column_text(row, 3)?,
                column_text(row, 4)?,
                column_text(row, 5)?,
            ],
            correct_option: row.get(6)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
