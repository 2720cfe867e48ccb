//! Puzzle construction
//!
//! Building answer sets for a letter set and generating new letter sets.

pub mod cache;
pub mod generator;
pub mod scorebook;

pub use cache::{DEFAULT_CACHE_CAPACITY, ScorebookBuilder, ScorebookCache};
pub use generator::{generate, is_good_selection};
pub use scorebook::{Scorebook, ScorebookEntry};
