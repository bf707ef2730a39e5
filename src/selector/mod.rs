pub mod classify;
pub mod conversation;
