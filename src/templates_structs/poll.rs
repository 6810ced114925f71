use askama::Template;
use chrono::{DateTime, Utc};

use crate::models::choice::Choice;
use crate::models::question::Question;
use super::PageContext;

/// A question row on the index page.
pub struct QuestionListItem {
    pub id: i64,
    pub question_text: String,
    pub pub_date: String,
    pub recent: bool,
}

impl QuestionListItem {
    pub fn new(question: Question, now: DateTime<Utc>) -> Self {
        Self {
            recent: question.was_published_recently(now),
            pub_date: question.pub_date.format("%d/%m/%Y %H:%M").to_string(),
            id: question.id,
            question_text: question.question_text,
        }
    }
}

#[derive(Template)]
#[template(path = "polls/index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub latest_question_list: Vec<QuestionListItem>,
}

#[derive(Template)]
#[template(path = "polls/detail.html")]
pub struct DetailTemplate {
    pub ctx: PageContext,
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "polls/results.html")]
pub struct ResultsTemplate {
    pub ctx: PageContext,
    pub question: Question,
    pub choices: Vec<Choice>,
    pub total_votes: i64,
}
