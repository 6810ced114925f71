use chrono::{DateTime, Utc};

use super::visibility;

/// How many questions the index page lists.
pub const LATEST_QUESTIONS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        visibility::is_visible(self.pub_date, now)
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        visibility::was_published_recently(self.pub_date, now)
    }
}
