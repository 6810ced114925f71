pub mod choice;
pub mod question;
pub mod timestamp;
