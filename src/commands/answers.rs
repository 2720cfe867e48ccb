//! Answers command
//!
//! Lists every valid word for a letter set without starting the game.

use crate::core::LetterSet;
use crate::puzzle::{ScorebookBuilder, ScorebookEntry};

/// Result of listing the answers for a letter set
pub struct AnswersResult {
    pub letters: LetterSet,
    /// Alphabetical
    pub entries: Vec<ScorebookEntry>,
    pub word_count: usize,
    pub pangram_count: usize,
    pub total_points: u32,
}

/// Build the scorebook for `letters` and collect its entries alphabetically
pub fn list_answers(letters: &LetterSet, builder: &mut ScorebookBuilder<'_>) -> AnswersResult {
    let scorebook = builder.for_letters(letters);
    log::debug!("Listing {} answers for {letters}", scorebook.len());

    AnswersResult {
        letters: *letters,
        entries: scorebook.sorted_entries().into_iter().cloned().collect(),
        word_count: scorebook.len(),
        pangram_count: scorebook.pangram_count(),
        total_points: scorebook.total_points(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRank;
    use crate::dictionary::loader::words_from_slice;

    #[test]
    fn lists_valid_words_alphabetically() {
        let dictionary = words_from_slice(&["tibia", "labia", "plantib", "bail", "lit", "nail"]);
        let mut builder = ScorebookBuilder::new(&dictionary);
        let letters: LetterSet = "bailnpt".parse().unwrap();

        let result = list_answers(&letters, &mut builder);

        let words: Vec<&str> = result.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["bail", "labia", "plantib", "tibia"]);
        assert_eq!(result.word_count, 4);
        assert_eq!(result.pangram_count, 1);
        assert_eq!(result.total_points, 1 + 5 + 14 + 5);
        assert_eq!(result.entries[2].rank, WordRank::Pangram);
    }

    #[test]
    fn no_answers() {
        let dictionary = words_from_slice(&["zebra"]);
        let mut builder = ScorebookBuilder::new(&dictionary);
        let letters: LetterSet = "bailnpt".parse().unwrap();

        let result = list_answers(&letters, &mut builder);
        assert!(result.entries.is_empty());
        assert_eq!(result.total_points, 0);
    }
}
