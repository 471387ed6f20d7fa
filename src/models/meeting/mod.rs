pub mod lifecycle;
pub mod queries;
pub mod store;
pub mod types;
pub mod voting;

pub use store::MeetingStore;
pub use types::*;
