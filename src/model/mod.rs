pub mod keyword;
pub mod message;
pub mod session_state;
pub mod story;
