use chrono::{DateTime, Duration, Utc};

/// Window within which a published question counts as recent.
pub fn recent_window() -> Duration {
    Duration::hours(24)
}

/// A question is visible once its publish instant has been reached.
pub fn is_visible(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// True iff `now - 24h < pub_date <= now`. Future-dated questions are never recent.
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_visible(pub_date, now) && pub_date > now - recent_window()
}
