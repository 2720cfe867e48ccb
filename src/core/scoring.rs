//! Per-word scoring
//!
//! A word's points and rank label depend only on its length and how many
//! distinct letters it uses.

use std::fmt;

/// Minimum length of an accepted answer
pub const MIN_WORD_LENGTH: usize = 4;

/// Distinct letters a word needs to count as a pangram
pub const PANGRAM_LETTERS: usize = 7;

/// Bonus added to a pangram's length
pub const PANGRAM_BONUS: u32 = 7;

/// Rank label awarded for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRank {
    /// Shorter than the minimum length; never produced for accepted words
    Unranked,
    Good,
    Nice,
    Awesome,
    Pangram,
}

impl WordRank {
    /// Text shown in the feedback banner
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unranked => "",
            Self::Good => "Good!",
            Self::Nice => "Nice!",
            Self::Awesome => "Awesome!",
            Self::Pangram => "Pangram!",
        }
    }
}

impl fmt::Display for WordRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank and points for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    pub rank: WordRank,
    pub points: u32,
}

/// Score a word by length and distinct letters
///
/// # Examples
/// ```
/// use terminal_bee::core::{WordRank, score_word};
///
/// assert_eq!(score_word("bail").points, 1);
/// assert_eq!(score_word("plaint").rank, WordRank::Nice);
/// assert_eq!(score_word("tableland").points, 16);
/// ```
#[must_use]
pub fn score_word(word: &str) -> WordScore {
    let length = word.chars().count();
    let (rank, points) = if length < MIN_WORD_LENGTH {
        (WordRank::Unranked, 0)
    } else if length == MIN_WORD_LENGTH {
        (WordRank::Good, 1)
    } else if length < PANGRAM_LETTERS {
        (WordRank::Nice, length as u32)
    } else if distinct_letters(word) < PANGRAM_LETTERS {
        (WordRank::Awesome, length as u32)
    } else {
        (WordRank::Pangram, length as u32 + PANGRAM_BONUS)
    };

    WordScore { rank, points }
}

/// Whether a word uses at least seven distinct letters (case-insensitive)
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    distinct_letters(word) >= PANGRAM_LETTERS
}

fn distinct_letters(word: &str) -> usize {
    let mut seen: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}
