//! Game state and its transitions
//!
//! Owns the puzzle, the guess buffer and the found words. Presentation
//! concerns (animation, timers, layout) live in [`super::session`].

use super::feedback::FeedbackEvent;
use crate::core::{LetterSet, MIN_WORD_LENGTH, RankStatus};
use crate::puzzle::Scorebook;
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Whether the puzzle is hidden behind the splash screen or being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Playing,
}

/// Everything about one puzzle in progress
#[derive(Debug, Clone)]
pub struct GameState {
    letters: LetterSet,
    scorebook: Arc<Scorebook>,
    phase: Phase,
    current_guess: String,
    found_words: Vec<String>,
    current_points: u32,
}

impl GameState {
    /// Start a puzzle on the splash screen
    #[must_use]
    pub fn new(letters: LetterSet, scorebook: Arc<Scorebook>) -> Self {
        Self {
            letters,
            scorebook,
            phase: Phase::Splash,
            current_guess: String::new(),
            found_words: Vec::new(),
            current_points: 0,
        }
    }

    /// Replace the puzzle and return to the splash screen with nothing found
    pub fn reset(&mut self, letters: LetterSet, scorebook: Arc<Scorebook>) {
        *self = Self::new(letters, scorebook);
    }

    pub fn start_playing(&mut self) {
        self.phase = Phase::Playing;
    }

    /// Append a letter to the guess; ignored on the splash screen
    pub fn append_letter(&mut self, letter: char) {
        if self.is_playing() {
            self.current_guess.push(letter);
        }
    }

    pub fn delete_last_letter(&mut self) {
        if self.is_playing() {
            self.current_guess.pop();
        }
    }

    pub fn clear_guess(&mut self) {
        if self.is_playing() {
            self.current_guess.clear();
        }
    }

    /// Check the current guess, score it if valid, and clear the buffer
    ///
    /// Rules are checked in order and the first failure wins: too short,
    /// already found, missing the center letter, not in the word list.
    /// Returns `None` on the splash screen.
    pub fn submit_guess(&mut self) -> Option<FeedbackEvent> {
        if !self.is_playing() {
            return None;
        }

        let guess = std::mem::take(&mut self.current_guess);
        let word = guess.to_lowercase();

        let feedback = if guess.chars().count() < MIN_WORD_LENGTH {
            FeedbackEvent::too_short()
        } else if self.found_words.contains(&word) {
            FeedbackEvent::already_found()
        } else if !word.contains(self.letters.center()) {
            FeedbackEvent::missing_center()
        } else if let Some(entry) = self.scorebook.get(&word) {
            let feedback = FeedbackEvent::scored(entry);
            self.current_points += entry.points;
            self.found_words.insert(0, word);
            feedback
        } else {
            FeedbackEvent::not_in_word_list()
        };

        Some(feedback)
    }

    /// Reorder the outer letters for display; answers are unaffected
    pub fn shuffle_outer_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut outer = *self.letters.outer();
        outer.shuffle(rng);
        self.letters = self.letters.with_outer_order(outer);
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[must_use]
    pub fn scorebook(&self) -> &Scorebook {
        &self.scorebook
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Found words, most recent first
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    #[must_use]
    pub const fn current_points(&self) -> u32 {
        self.current_points
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.scorebook.total_points()
    }

    #[must_use]
    pub fn rank(&self) -> RankStatus {
        RankStatus::from_points(self.current_points, self.total_points())
    }
}
