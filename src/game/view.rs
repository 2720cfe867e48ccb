//! Single derivation pass from game state to everything the renderer draws
//!
//! `derive_view` is pure: given the state, the presentation state and the
//! clock it always yields the same `ViewModel`.

use super::animation::AnimatedValue;
use super::feedback::FeedbackEvent;
use super::paginator::{Paginator, WordListPage};
use super::state::{GameState, Phase};
use crate::core::{RankStatus, is_pangram};

/// Cursor blink period; the cursor shows for the first half
pub const CURSOR_PERIOD: f64 = 1.0;

/// Seconds per character as a newly found word slides into the strip
pub const TICKER_STEP: f64 = 0.01;

/// Gap between words in the recent-words strip
pub const RECENT_SEPARATOR: &str = "   ";

/// Presentation-only state kept alongside the game state
///
/// Only the session writes it; the renderer sees it through [`ViewModel`].
///
/// ```compile_fail
/// let mut presentation = terminal_bee::game::PresentationState::default();
/// presentation.word_list_open = true;
/// ```
#[derive(Debug, Clone)]
pub struct PresentationState {
    pub(crate) splash_opacity: AnimatedValue,
    pub(crate) outer_opacity: AnimatedValue,
    pub(crate) feedback_opacity: AnimatedValue,
    pub(crate) feedback: Option<FeedbackEvent>,
    /// When the newest found word started sliding in
    pub(crate) ticker_start: f64,
    pub(crate) word_list_open: bool,
    pub(crate) paginator: Paginator,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            splash_opacity: AnimatedValue::new(1.0),
            outer_opacity: AnimatedValue::new(1.0),
            feedback_opacity: AnimatedValue::new(0.0),
            feedback: None,
            ticker_start: f64::NEG_INFINITY,
            word_list_open: false,
            paginator: Paginator::new(),
        }
    }
}

impl PresentationState {
    /// Back to the initial look, keeping the known column dimensions
    pub fn reset(&mut self) {
        let mut paginator = self.paginator.clone();
        paginator.reset();
        *self = Self {
            paginator,
            ..Self::default()
        };
    }

    /// Whether any fade, page scroll or ticker slide is still in progress
    #[must_use]
    pub fn is_animating(&self, found_words: &[String], now: f64) -> bool {
        let ticker_sliding = !self.word_list_open
            && found_words.first().is_some_and(|newest| {
                let tape_len = newest.chars().count() + RECENT_SEPARATOR.chars().count();
                now < self.ticker_start + tape_len as f64 * TICKER_STEP
            });

        ticker_sliding
            || self.splash_opacity.is_animating(now)
            || self.outer_opacity.is_animating(now)
            || self.feedback_opacity.is_animating(now)
            || self.paginator.is_animating(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessLetter {
    pub letter: char,
    pub is_center: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    pub message: String,
    pub points: u32,
    pub opacity: f64,
    pub rejected: bool,
    pub pangram: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub rank: RankStatus,
    pub current_points: u32,
    pub total_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentWord {
    pub text: String,
    pub pangram: bool,
}

/// Found words strip shown while the word list is closed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentStrip {
    /// Revealed tail of the newest word and its trailing separator
    pub ticker: String,
    pub ticker_pangram: bool,
    /// Every other found word, most recent first
    pub older: Vec<RecentWord>,
}

/// Read-only snapshot for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub phase: Phase,
    pub splash_opacity: f64,
    pub center: char,
    pub outer: [char; 6],
    pub outer_opacity: f64,
    pub guess: Vec<GuessLetter>,
    pub cursor_visible: bool,
    pub feedback: Option<FeedbackView>,
    pub status: StatusView,
    pub recent: Option<RecentStrip>,
    pub word_list: Option<WordListPage>,
}

/// First letter upper case, the rest lower case
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Whether the guess cursor is drawn at time `now`
#[must_use]
pub fn cursor_visible(now: f64) -> bool {
    now.rem_euclid(CURSOR_PERIOD) < CURSOR_PERIOD / 2.0
}

/// First time after `now` at which the cursor blinks on or off
#[must_use]
pub fn next_cursor_toggle(now: f64) -> f64 {
    let half = CURSOR_PERIOD / 2.0;
    ((now / half).floor() + 1.0) * half
}

/// Build the frame snapshot
#[must_use]
pub fn derive_view(state: &GameState, presentation: &PresentationState, now: f64) -> ViewModel {
    let letters = state.letters();
    let center = letters.center().to_ascii_uppercase();

    let guess = state
        .current_guess()
        .chars()
        .map(|letter| GuessLetter {
            letter,
            is_center: letter.to_ascii_uppercase() == center,
        })
        .collect();

    let feedback = presentation.feedback.as_ref().and_then(|event| {
        let opacity = presentation.feedback_opacity.value_at(now);
        (opacity > 0.0).then(|| FeedbackView {
            message: event.message.clone(),
            points: event.points,
            opacity,
            rejected: event.is_rejection(),
            pangram: event.is_pangram(),
        })
    });

    let status = StatusView {
        rank: state.rank(),
        current_points: state.current_points(),
        total_points: state.total_points(),
    };

    let (recent, word_list) = if presentation.word_list_open {
        (
            None,
            presentation.paginator.render(state.found_words(), now),
        )
    } else {
        (
            Some(recent_strip(state.found_words(), presentation.ticker_start, now)),
            None,
        )
    };

    ViewModel {
        phase: state.phase(),
        splash_opacity: presentation.splash_opacity.value_at(now),
        center,
        outer: letters.outer().map(|c| c.to_ascii_uppercase()),
        outer_opacity: presentation.outer_opacity.value_at(now),
        guess,
        cursor_visible: cursor_visible(now),
        feedback,
        status,
        recent,
        word_list,
    }
}

fn recent_strip(found_words: &[String], ticker_start: f64, now: f64) -> RecentStrip {
    let Some((newest, older)) = found_words.split_first() else {
        return RecentStrip::default();
    };

    let tape = format!("{}{RECENT_SEPARATOR}", capitalize(newest));
    let tape_len = tape.chars().count();
    let elapsed = (now - ticker_start).max(0.0);
    let revealed = ((elapsed / TICKER_STEP).floor() as usize).min(tape_len);
    let ticker: String = tape.chars().skip(tape_len - revealed).collect();

    RecentStrip {
        ticker,
        ticker_pangram: is_pangram(newest),
        older: older
            .iter()
            .map(|w| RecentWord {
                text: capitalize(w),
                pangram: is_pangram(w),
            })
            .collect(),
    }
}
