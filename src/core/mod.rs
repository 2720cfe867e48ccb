//! Core domain types for the puzzle
//!
//! Pure values with no I/O: letter sets, word scoring and player rank.

mod letters;
mod rank;
mod scoring;

pub use letters::{LetterSet, PLACEHOLDER_LETTER};
pub use rank::{RANK_SEGMENTS, RankStatus, point_percent};
pub use scoring::{
    MIN_WORD_LENGTH, PANGRAM_BONUS, PANGRAM_LETTERS, WordRank, WordScore, is_pangram, score_word,
};
