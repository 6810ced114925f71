/// Longest question or choice text accepted.
pub const MAX_TEXT_LEN: usize = 200;

/// Validate question text: required, at most 200 characters.
pub fn validate_question_text(text: &str) -> Option<String> {
    validate_text(text, "Question text")
}

/// Validate choice text: required, at most 200 characters.
pub fn validate_choice_text(text: &str) -> Option<String> {
    validate_text(text, "Choice text")
}

fn validate_text(text: &str, label: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Some(format!("{label} must be at most {MAX_TEXT_LEN} characters"));
    }
    None
}
