//! Infrastructure: SQLite connection handling, schema and seed data.

pub mod db;
pub mod schema;

pub(crate) use db::column_text;
pub use db::{get_connection, init_db, Db};
