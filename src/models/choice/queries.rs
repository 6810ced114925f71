use sqlx::{Executor, Sqlite};

use crate::db::DbPool;
use crate::errors::AppError;
use super::types::Choice;

/// Add a choice to a question. Returns the new choice id.
pub async fn create<'e, E>(executor: E, question_id: i64, choice_text: &str) -> Result<i64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO choices (question_id, choice_text, votes) VALUES (?1, ?2, 0)",
    )
    .bind(question_id)
    .bind(choice_text)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Choice>, AppError> {
    let choice = sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choices WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(choice)
}

pub async fn find_for_question(pool: &DbPool, question_id: i64) -> Result<Vec<Choice>, AppError> {
    let choices = sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choices \
         WHERE question_id = ?1 ORDER BY id",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await?;
    Ok(choices)
}

/// Add one vote to a choice of the given question in a single statement.
///
/// Returns false when the choice does not exist or belongs to another question;
/// nothing is written in that case.
pub async fn increment_votes(
    pool: &DbPool,
    question_id: i64,
    choice_id: i64,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE choices SET votes = votes + 1 WHERE id = ?1 AND question_id = ?2",
    )
    .bind(choice_id)
    .bind(question_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}
