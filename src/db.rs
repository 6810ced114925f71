use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::{choice, question};
use crate::validate;

pub type DbPool = SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

const DEMO_SEED: &str = include_str!("../data/seed/polls.json");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct SeedPayload {
    pub questions: Vec<SeedQuestion>,
}

/// A question in a seed file. `days_offset` is relative to the seeding instant:
/// negative for already published, positive for scheduled.
#[derive(Debug, Deserialize)]
pub struct SeedQuestion {
    pub question_text: String,
    #[serde(default)]
    pub days_offset: i64,
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Import a seed payload. Returns the number of questions created.
pub async fn import_seed(
    pool: &DbPool,
    payload: &SeedPayload,
    now: DateTime<Utc>,
) -> Result<usize, AppError> {
    let mut tx = pool.begin().await?;
    for (i, q) in payload.questions.iter().enumerate() {
        let mut errors = vec![];
        errors.extend(validate::validate_question_text(&q.question_text));
        for c in &q.choices {
            errors.extend(validate::validate_choice_text(c));
        }
        if !errors.is_empty() {
            return Err(AppError::Seed(format!("question #{i}: {}", errors.join("; "))));
        }

        let pub_date = TimeDelta::try_days(q.days_offset)
            .and_then(|offset| now.checked_add_signed(offset))
            .ok_or_else(|| AppError::Seed(format!("question #{i}: days_offset out of range")))?;
        let question_id = question::create(&mut *tx, q.question_text.trim(), pub_date).await?;
        for c in &q.choices {
            choice::create(&mut *tx, question_id, c.trim()).await?;
        }
    }
    tx.commit().await?;
    Ok(payload.questions.len())
}

/// Seed the bundled demo polls unless the database already has questions.
pub async fn seed_demo(pool: &DbPool, now: DateTime<Utc>) -> Result<usize, AppError> {
    let existing = question::count(pool).await?;
    if existing > 0 {
        log::info!("Database already seeded ({existing} questions), skipping demo seed");
        return Ok(0);
    }

    let payload: SeedPayload = serde_json::from_str(DEMO_SEED)
        .map_err(|e| AppError::Seed(format!("bad demo seed JSON: {e}")))?;
    let created = import_seed(pool, &payload, now).await?;
    log::info!("Demo seed complete: created={created}");
    Ok(created)
}
