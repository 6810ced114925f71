use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::timestamp;
use super::types::Question;

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question_text: String,
    pub_date: String,
}

impl TryFrom<QuestionRow> for Question {
    type Error = AppError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: row.id,
            question_text: row.question_text,
            pub_date: timestamp::from_storage(&row.pub_date)?,
        })
    }
}

/// Create a question. Returns the new question id.
///
/// Takes any executor so seeding can run inside a transaction.
pub async fn create<'e, E>(
    executor: E,
    question_text: &str,
    pub_date: DateTime<Utc>,
) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("INSERT INTO questions (question_text, pub_date) VALUES (?1, ?2)")
        .bind(question_text)
        .bind(timestamp::to_storage(pub_date)?)
        .execute(executor)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Question>, AppError> {
    let row = sqlx::query_as::<_, QuestionRow>(
        "SELECT id, question_text, pub_date FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Question::try_from).transpose()
}

/// All questions, most recently published first. Ties go to the higher id.
pub async fn find_all_ordered(pool: &DbPool) -> Result<Vec<Question>, AppError> {
    let rows = sqlx::query_as::<_, QuestionRow>(
        "SELECT id, question_text, pub_date FROM questions \
         ORDER BY pub_date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Question::try_from).collect()
}

/// The `limit` most recent questions that are visible at `now`.
///
/// The stored format sorts chronologically, so SQL narrows the rows;
/// `is_visible` still decides on the parsed instants.
pub async fn find_latest_visible(
    pool: &DbPool,
    now: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<Question>, AppError> {
    let rows = sqlx::query_as::<_, QuestionRow>(
        "SELECT id, question_text, pub_date FROM questions \
         WHERE pub_date <= ?1 \
         ORDER BY pub_date DESC, id DESC \
         LIMIT ?2",
    )
    .bind(timestamp::to_storage(now)?)
    .bind(i64::try_from(limit).unwrap_or(i64::MAX))
    .fetch_all(pool)
    .await?;

    let mut questions = Vec::with_capacity(rows.len());
    for row in rows {
        let q = Question::try_from(row)?;
        if q.is_visible(now) {
            questions.push(q);
        }
    }
    Ok(questions)
}

/// Look up a question that end users may see. Missing and not-yet-published
/// questions are both `NotFound`.
pub async fn find_visible_by_id(
    pool: &DbPool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Question, AppError> {
    match find_by_id(pool, id).await? {
        Some(q) if q.is_visible(now) => Ok(q),
        _ => Err(AppError::NotFound),
    }
}

pub async fn count(pool: &DbPool) -> Result<i64, AppError> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Delete a question. Its choices go with it through the foreign key cascade.
pub async fn delete(pool: &DbPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
