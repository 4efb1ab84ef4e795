#![allow(dead_code)]
use postboard::infrastructure::persistence::Database;
use tempfile::TempDir;

/// Throwaway SQLite database living in its own temporary directory
pub struct TestDatabase {
    // Field order matters: the pool must drop before the directory is removed
    db: Database,
    _dir: TempDir,
}

impl TestDatabase {
    pub fn db(&self) -> &Database {
        &self.db
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // Unique directory per test for parallel execution
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let db = Database::connect(&db_url, 5)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDatabase { db, _dir: dir }
}
