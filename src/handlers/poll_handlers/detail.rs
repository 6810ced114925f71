use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::{choice, question};
use crate::templates_structs::{DetailTemplate, PageContext, ResultsTemplate};

/// GET /detail/{id}
/// Vote form for a published question. Unpublished questions are 404.
pub async fn detail(
    pool: web::Data<DbPool>,
    clock: web::Data<dyn Clock>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let question = question::find_visible_by_id(&pool, id, clock.now()).await?;
    let choices = choice::find_for_question(&pool, question.id).await?;

    let ctx = PageContext::build(&session, &config);
    render(DetailTemplate { ctx, question, choices, error_message: None })
}

/// GET /results/{id}
pub async fn results(
    pool: web::Data<DbPool>,
    clock: web::Data<dyn Clock>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let question = question::find_visible_by_id(&pool, id, clock.now()).await?;
    let choices = choice::find_for_question(&pool, question.id).await?;
    let total_votes = choices.iter().map(|c| c.votes).sum();

    let ctx = PageContext::build(&session, &config);
    render(ResultsTemplate { ctx, question, choices, total_votes })
}
