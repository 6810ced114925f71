pub mod types;
pub mod queries;
pub mod visibility;

pub use types::*;
pub use queries::*;
pub use visibility::{is_visible, was_published_recently};
