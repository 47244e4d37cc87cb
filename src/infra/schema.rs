//! Table creation and first-run seed data.

use crate::error::AppError;
use rusqlite::{params, Connection, Transaction};

const SCHEMA: &str = include_str!("schema.sql");

/// (title, author, publish_date, abstract, content, pdf_path)
const SEED_RESEARCH: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "Sedation Protocols in Mechanically Ventilated Patients",
        "Dr. James Wilson",
        "2023-08-15",
        "Comparative study of sedation protocols...",
        "Full content here",
        "/pdfs/sedation.pdf",
    ),
    (
        "Early Mobilization in ICU: Effects on Patient Outcomes",
        "Dr. Sarah Johnson",
        "2023-07-28",
        "Randomized controlled trial demonstrating...",
        "Full content here",
        "/pdfs/mobilization.pdf",
    ),
];

/// (question, [option1..option4], correct_option)
const SEED_QUIZ: &[(&str, [&str; 4], i64)] = &[
    (
        "Which of the following is the first-line vasopressor for septic shock?",
        ["Norepinephrine", "Dopamine", "Epinephrine", "Vasopressin"],
        1,
    ),
    (
        "What is the recommended head-of-bed elevation for mechanically ventilated patients to prevent VAP?",
        ["15-20 degrees", "30-45 degrees", "0-10 degrees", "45-60 degrees"],
        2,
    ),
];

/// Create all tables if absent and seed empty reference tables.
///
/// Safe to run on every start: table creation is `IF NOT EXISTS` and each
/// seed is gated on its table being empty.
pub fn initialize(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;

    if table_is_empty(&tx, "research_articles")? {
        for (title, author, publish_date, abstract_, content, pdf_path) in SEED_RESEARCH {
            tx.execute(
                "INSERT INTO research_articles (title, author, publish_date, abstract, content, pdf_path) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![title, author, publish_date, abstract_, content, pdf_path],
            )?;
        }
        log::info!("seeded {} research articles", SEED_RESEARCH.len());
    }

    if table_is_empty(&tx, "quiz_questions")? {
        for (question, [o1, o2, o3, o4], correct) in SEED_QUIZ {
            tx.execute(
                "INSERT INTO quiz_questions (question, option1, option2, option3, option4, correct_option) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![question, o1, o2, o3, o4, correct],
            )?;
        }
        log::info!("seeded {} quiz questions", SEED_QUIZ.len());
    }

    tx.commit()?;
    Ok(())
}

// `table` is always one of the literals above, never user input.
fn table_is_empty(tx: &Transaction<'_>, table: &str) -> Result<bool, AppError> {
    let count: i64 = tx.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
    Ok(count == 0)
}
