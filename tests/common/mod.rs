//! Shared helpers for integration tests.

use icu_edu::infra::{init_db, Db};
use std::ops::Deref;
use tempfile::TempDir;

/// Initialized database that is deleted with its directory on drop.
pub struct TestDb {
    db: Db,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Db;

    fn deref(&self) -> &Db {
        &self.db
    }
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = init_db(&dir.path().join("icu_education.db")).expect("init test db");
    TestDb { db, _dir: dir }
}
