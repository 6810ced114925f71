mod list;
mod detail;
mod vote;

pub use list::index;
pub use detail::{detail, results};
pub use vote::{vote, VoteForm, NO_CHOICE_SELECTED};
