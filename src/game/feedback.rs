//! Feedback shown after each submitted guess

use crate::core::WordRank;
use crate::puzzle::ScorebookEntry;

pub const TOO_SHORT: &str = "Too short";
pub const ALREADY_FOUND: &str = "Already found";
pub const MISSING_CENTER: &str = "Missing center letter";
pub const NOT_IN_WORD_LIST: &str = "Not in word list";

/// Seconds a feedback banner stays up before fading out
pub const FEEDBACK_HOLD: f64 = 1.0;

/// Transient banner text and points awarded (0 for rejected guesses)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub message: String,
    pub points: u32,
}

impl FeedbackEvent {
    fn rejected(message: &str) -> Self {
        Self {
            message: message.to_string(),
            points: 0,
        }
    }

    #[must_use]
    pub fn too_short() -> Self {
        Self::rejected(TOO_SHORT)
    }

    #[must_use]
    pub fn already_found() -> Self {
        Self::rejected(ALREADY_FOUND)
    }

    #[must_use]
    pub fn missing_center() -> Self {
        Self::rejected(MISSING_CENTER)
    }

    #[must_use]
    pub fn not_in_word_list() -> Self {
        Self::rejected(NOT_IN_WORD_LIST)
    }

    /// Feedback for an accepted word: its rank label and points
    #[must_use]
    pub fn scored(entry: &ScorebookEntry) -> Self {
        Self {
            message: entry.rank.label().to_string(),
            points: entry.points,
        }
    }

    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        self.points == 0
    }

    #[must_use]
    pub fn is_pangram(&self) -> bool {
        self.message == WordRank::Pangram.label()
    }
}
