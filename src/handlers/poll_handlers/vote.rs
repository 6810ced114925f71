use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::csrf;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::{choice, question};
use crate::templates_structs::{DetailTemplate, PageContext};

pub const NO_CHOICE_SELECTED: &str = "No has seleccionado una opción.";

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub choice: Option<String>,
    #[serde(default)]
    pub csrf_token: String,
}

impl VoteForm {
    /// The selected choice id. Blank or non-numeric input counts as no selection.
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref().and_then(|c| c.trim().parse().ok())
    }
}

/// POST /vote/{id}
/// Adds one vote to the selected choice and redirects to the results page.
/// A missing or foreign choice re-renders the form with an error.
pub async fn vote(
    pool: web::Data<DbPool>,
    clock: web::Data<dyn Clock>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<VoteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let question = question::find_visible_by_id(&pool, id, clock.now()).await?;

    let choice_id = form.choice_id();
    let counted = match choice_id {
        Some(choice_id) => choice::increment_votes(&pool, question.id, choice_id).await?,
        None => false,
    };

    if !counted {
        let choices = choice::find_for_question(&pool, question.id).await?;
        let ctx = PageContext::build(&session, &config);
        return render(DetailTemplate {
            ctx,
            question,
            choices,
            error_message: Some(NO_CHOICE_SELECTED.to_string()),
        });
    }

    log::debug!("Vote recorded: question={} choice={:?}", question.id, choice_id);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/results/{}", question.id)))
        .finish())
}
