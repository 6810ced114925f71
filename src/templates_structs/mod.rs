// Template context structures for Askama templates.

use actix_session::Session;

use crate::config::AppConfig;
use crate::csrf;

mod poll;

pub use self::poll::{DetailTemplate, IndexTemplate, QuestionListItem, ResultsTemplate};

/// Common context shared by all pages. Templates access it as `ctx.app_name`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
