use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::question::{self, LATEST_QUESTIONS_LIMIT};
use crate::templates_structs::{IndexTemplate, PageContext, QuestionListItem};

/// GET /
/// Latest visible questions, most recent first.
pub async fn index(
    pool: web::Data<DbPool>,
    clock: web::Data<dyn Clock>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let now = clock.now();
    let questions = question::find_latest_visible(&pool, now, LATEST_QUESTIONS_LIMIT).await?;
    let latest_question_list = questions
        .into_iter()
        .map(|q| QuestionListItem::new(q, now))
        .collect();

    let ctx = PageContext::build(&session, &config);
    render(IndexTemplate { ctx, latest_question_list })
}
