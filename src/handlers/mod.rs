pub mod poll_handlers;
