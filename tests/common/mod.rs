//! Shared test infrastructure.
//!
//! - `setup_test_db()` - in-memory SQLite with the schema applied
//! - `setup_file_db()` - file-backed SQLite with several pooled connections
//! - `create_question()` - question published `days` away from a given instant

#![allow(dead_code)]

use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

use premios::db::{self, DbPool};
use premios::models::{choice, question};

/// Test database. Keep it alive for as long as the pool is used.
pub struct TestDb {
    pool: DbPool,
    _dir: Option<TempDir>,
}

impl TestDb {
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Fresh in-memory database with migrations applied.
///
/// A single connection with no idle timeout keeps the in-memory database
/// alive for the whole test.
pub async fn setup_test_db() -> TestDb {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory URL")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory DB");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb { pool, _dir: None }
}

/// Database file in a temp dir, opened the way the server opens it
/// (WAL, foreign keys, `max_connections` pooled connections).
pub async fn setup_file_db(max_connections: u32) -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = db::init_pool(&url, max_connections)
        .await
        .expect("Failed to open file DB");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb { pool, _dir: Some(dir) }
}

/// Fixed reference instant for tests.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// Create a question published `days` days from `now`
/// (negative: already published, positive: not yet published).
pub async fn create_question(pool: &DbPool, text: &str, days: i64, now: DateTime<Utc>) -> i64 {
    question::create(pool, text, now + Duration::days(days))
        .await
        .expect("create question")
}

/// Create a question with the given choices. Returns (question_id, choice_ids).
pub async fn create_question_with_choices(
    pool: &DbPool,
    text: &str,
    days: i64,
    now: DateTime<Utc>,
    choices: &[&str],
) -> (i64, Vec<i64>) {
    let question_id = create_question(pool, text, days, now).await;
    let mut ids = vec![];
    for c in choices {
        ids.push(
            choice::create(pool, question_id, c)
                .await
                .expect("create choice"),
        );
    }
    (question_id, ids)
}

pub async fn votes_of(pool: &DbPool, choice_id: i64) -> i64 {
    choice::find_by_id(pool, choice_id)
        .await
        .expect("query")
        .expect("choice exists")
        .votes
}
