pub mod meeting_handlers;
pub mod responses;
