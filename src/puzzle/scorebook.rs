//! Answer sets for a letter set
//!
//! A scorebook holds every dictionary word that can be made from the puzzle
//! letters, with its rank label and points precomputed.

use crate::core::{WordRank, score_word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// One valid answer with its scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorebookEntry {
    pub word: String,
    pub rank: WordRank,
    pub points: u32,
}

/// All valid answers for one letter set, keyed by lowercase word
#[derive(Debug, Clone, Default)]
pub struct Scorebook {
    entries: FxHashMap<String, ScorebookEntry>,
    total_points: u32,
    pangram_count: usize,
}

impl Scorebook {
    /// Filter the dictionary down to words made from `required` plus `optional`
    ///
    /// A word is kept when it is at least `min_size` letters long, contains
    /// `required`, and uses no letter outside `required` and `optional`.
    #[must_use]
    pub fn build(dictionary: &Dictionary, required: char, optional: &[char], min_size: usize) -> Self {
        let required = required.to_ascii_lowercase();
        let Some(required_bit) = letter_bit(required) else {
            // Placeholder letters never match a dictionary word
            return Self::default();
        };
        let allowed = optional
            .iter()
            .filter_map(|&c| letter_bit(c.to_ascii_lowercase()))
            .fold(required_bit, |mask, bit| mask | bit);

        let entries: FxHashMap<String, ScorebookEntry> = dictionary
            .words()
            .par_iter()
            .filter(|word| word.len() >= min_size)
            .filter(|word| {
                let mask = word_mask(word);
                mask & required_bit != 0 && mask & !allowed == 0
            })
            .map(|word| {
                let score = score_word(word);
                let entry = ScorebookEntry {
                    word: word.clone(),
                    rank: score.rank,
                    points: score.points,
                };
                (word.clone(), entry)
            })
            .collect();

        Self::from_entries(entries)
    }

    fn from_entries(entries: FxHashMap<String, ScorebookEntry>) -> Self {
        let total_points = entries.values().map(|e| e.points).sum();
        let pangram_count = entries
            .values()
            .filter(|e| e.rank == WordRank::Pangram)
            .count();
        Self {
            entries,
            total_points,
            pangram_count,
        }
    }

    /// Look up a word (expects lowercase)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&ScorebookEntry> {
        self.entries.get(word)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of points over every answer: the maximum score for the puzzle
    #[must_use]
    pub const fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub const fn pangram_count(&self) -> usize {
        self.pangram_count
    }

    /// Entries in alphabetical order
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<&ScorebookEntry> {
        let mut entries: Vec<&ScorebookEntry> = self.entries.values().collect();
        entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        entries
    }
}

fn letter_bit(letter: char) -> Option<u32> {
    letter
        .is_ascii_lowercase()
        .then(|| 1 << (letter as u32 - 'a' as u32))
}

/// Bit set of the letters in a normalized dictionary word
fn word_mask(word: &str) -> u32 {
    word.bytes()
        .filter(u8::is_ascii_lowercase)
        .fold(0, |mask, b| mask | 1 << (b - b'a'))
}
