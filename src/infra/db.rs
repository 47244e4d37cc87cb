//! SQLite connection handling.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the single local database file.
///
/// Holds no open connection: every use case opens its own with
/// [`get_connection`] and drops it before returning.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Initialize DB at path, create tables, seed reference data, return the handle.
pub fn init_db(db_path: &Path) -> Result<Db, AppError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
    }
    let db = Db {
        path: db_path.to_path_buf(),
    };
    let mut conn = get_connection(&db)?;
    super::schema::initialize(&mut conn)?;
    log::info!("database ready at {:?}", db_path);
    Ok(db)
}

/// Open a fresh connection; it is closed when the returned value is dropped.
pub fn get_connection(db: &Db) -> Result<Connection, AppError> {
    let conn = Connection::open(&db.path).map_err(|e| AppError::Db(e.to_string()))?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Read a TEXT column, treating NULL (rows written out-of-band) as "".
pub(crate) fn column_text(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}
