//! Command implementations

pub mod answers;

pub use answers::{AnswersResult, list_answers};
