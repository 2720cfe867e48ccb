//! Event-driven game session
//!
//! Routes input events into the game state, schedules the presentation
//! timers and animations, and exposes a frame snapshot via [`Session::view`].
//! Time is passed in explicitly as seconds so behaviour is deterministic.

use super::animation::{FADE, SPLASH_FADE};
use super::feedback::FEEDBACK_HOLD;
use super::state::{GameState, Phase};
use super::timers::{Timer, TimerKind, TimerQueue};
use super::view::{PresentationState, ViewModel, derive_view, next_cursor_toggle};
use crate::core::LetterSet;
use crate::puzzle::{ScorebookBuilder, generate};
use rand::rngs::StdRng;

/// Input events from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Delete,
    ClearGuess,
    Submit,
    Shuffle,
    ScrollLeft,
    ScrollRight,
    ToggleWordList,
    /// Width of the found-words strip and height of the main area
    Resize { strip_width: u16, main_height: u16 },
    Reset,
    StartPlaying,
}

/// One player's game: state, presentation and pending timers
pub struct Session<'a> {
    builder: ScorebookBuilder<'a>,
    rng: StdRng,
    state: GameState,
    presentation: PresentationState,
    timers: TimerQueue,
    generation: u64,
    feedback_seq: u64,
    revealing: bool,
    area: (u16, u16),
}

impl<'a> Session<'a> {
    /// Start on the splash screen with `letters`, or a generated puzzle if `None`
    pub fn new(mut builder: ScorebookBuilder<'a>, mut rng: StdRng, letters: Option<LetterSet>) -> Self {
        let letters = letters.unwrap_or_else(|| generate(&mut builder, &mut rng));
        let scorebook = builder.for_letters(&letters);
        log::info!(
            "New puzzle {letters} with {} answers worth {} points",
            scorebook.len(),
            scorebook.total_points()
        );

        Self {
            builder,
            rng,
            state: GameState::new(letters, scorebook),
            presentation: PresentationState::default(),
            timers: TimerQueue::new(),
            generation: 0,
            feedback_seq: 0,
            revealing: false,
            area: (0, 0),
        }
    }

    /// Replace the puzzle and return to the splash screen
    ///
    /// Timers already scheduled for the previous puzzle are ignored when they fire.
    pub fn reset(&mut self, letters: Option<LetterSet>) {
        let letters = letters.unwrap_or_else(|| generate(&mut self.builder, &mut self.rng));
        let scorebook = self.builder.for_letters(&letters);
        log::info!(
            "Reset to puzzle {letters} with {} answers worth {} points",
            scorebook.len(),
            scorebook.total_points()
        );

        self.generation += 1;
        self.state.reset(letters, scorebook);
        self.presentation.reset();
        self.revealing = false;
    }

    /// Apply one input event at time `now`
    pub fn handle(&mut self, input: Input, now: f64) {
        match input {
            Input::StartPlaying => self.start_playing(now),
            Input::Reset => self.reset(None),
            Input::Resize {
                strip_width,
                main_height,
            } => {
                self.area = (strip_width, main_height);
                self.presentation.paginator.resize(strip_width, main_height);
            }
            _ if !self.state.is_playing() => {}
            Input::ToggleWordList => self.toggle_word_list(now),
            Input::ScrollLeft => {
                if self.presentation.word_list_open {
                    self.presentation.paginator.scroll_left(now);
                }
            }
            Input::ScrollRight => {
                if self.presentation.word_list_open {
                    let found = self.state.found_words().len();
                    self.presentation.paginator.scroll_right(found, now);
                }
            }
            _ if self.presentation.word_list_open => {}
            Input::Letter(letter) => {
                if self.state.letters().contains(letter) {
                    self.state.append_letter(letter.to_ascii_uppercase());
                }
            }
            Input::Delete => self.state.delete_last_letter(),
            Input::ClearGuess => self.state.clear_guess(),
            Input::Submit => self.submit(now),
            Input::Shuffle => {
                self.presentation.outer_opacity.animate_to(0.0, now, FADE);
                self.schedule(now, FADE, TimerKind::ShuffleMidpoint);
            }
        }
    }

    /// Fire due timers; call once per frame
    pub fn tick(&mut self, now: f64) {
        for timer in self.timers.take_due(now) {
            if timer.generation == self.generation {
                self.fire(timer, now);
            } else {
                log::trace!("Dropping stale timer {timer:?}");
            }
        }
    }

    /// Snapshot for the renderer
    #[must_use]
    pub fn view(&self, now: f64) -> ViewModel {
        derive_view(&self.state, &self.presentation, now)
    }

    /// Earliest time the frame can change without new input
    ///
    /// `Some(now)` while anything is animating, otherwise the next timer or
    /// cursor blink. `None` means the screen is static until the next event.
    #[must_use]
    pub fn next_frame(&self, now: f64) -> Option<f64> {
        if self
            .presentation
            .is_animating(self.state.found_words(), now)
        {
            return Some(now);
        }

        let blink = (self.state.is_playing() && !self.presentation.word_list_open)
            .then(|| next_cursor_toggle(now));
        match (self.timers.next_due(), blink) {
            (Some(due), Some(blink)) => Some(due.min(blink)),
            (due, blink) => due.or(blink),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn word_list_open(&self) -> bool {
        self.presentation.word_list_open
    }

    #[must_use]
    pub fn target_page(&self) -> usize {
        self.presentation.paginator.target_page()
    }

    /// Pending timer count, including stale ones not yet fired
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn schedule(&mut self, now: f64, delay: f64, kind: TimerKind) {
        self.timers.schedule(now, delay, self.generation, kind);
    }

    fn start_playing(&mut self, now: f64) {
        if self.state.phase() != Phase::Splash || self.revealing {
            return;
        }
        self.revealing = true;
        self.presentation
            .splash_opacity
            .animate_to(0.0, now, SPLASH_FADE);
        self.schedule(now, SPLASH_FADE, TimerKind::RevealBoard);
    }

    fn toggle_word_list(&mut self, now: f64) {
        let presentation = &mut self.presentation;
        presentation.word_list_open = !presentation.word_list_open;
        if presentation.word_list_open {
            presentation
                .paginator
                .set_dimensions(self.area.0, self.area.1);
        } else {
            presentation.ticker_start = now;
        }
    }

    fn submit(&mut self, now: f64) {
        let found_before = self.state.found_words().len();
        let Some(feedback) = self.state.submit_guess() else {
            return;
        };
        log::debug!("Submitted guess: {feedback:?}");

        if self.state.found_words().len() > found_before {
            self.presentation.ticker_start = now;
        }

        self.feedback_seq += 1;
        self.presentation.feedback = Some(feedback);
        self.presentation.feedback_opacity.animate_to(1.0, now, FADE);
        self.schedule(now, FEEDBACK_HOLD, TimerKind::HideFeedback(self.feedback_seq));
    }

    fn fire(&mut self, timer: Timer, now: f64) {
        match timer.kind {
            TimerKind::RevealBoard => {
                self.revealing = false;
                self.state.start_playing();
                self.presentation
                    .paginator
                    .set_dimensions(self.area.0, self.area.1);
            }
            TimerKind::ShuffleMidpoint => {
                self.state.shuffle_outer_letters(&mut self.rng);
                self.presentation.outer_opacity.animate_to(1.0, now, FADE);
            }
            TimerKind::HideFeedback(seq) => {
                // A newer submit owns the banner now
                if seq == self.feedback_seq {
                    self.presentation.feedback_opacity.animate_to(0.0, now, FADE);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::game::feedback::{MISSING_CENTER, TOO_SHORT};
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    fn dictionary() -> Dictionary {
        words_from_slice(&[
            "labia", "albit", "blab", "pinball", "plantib", "tibia", "banal", "blip", "ablin",
            "nabit", "plaint",
        ])
    }

    fn session(dictionary: &Dictionary) -> Session<'_> {
        let builder = ScorebookBuilder::new(dictionary);
        let rng = StdRng::seed_from_u64(42);
        let letters: LetterSet = "bailnpt".parse().unwrap();
        let mut session = Session::new(builder, rng, Some(letters));
        session.handle(
            Input::Resize {
                strip_width: 24,
                main_height: 10,
            },
            0.0,
        );
        session
    }

    fn playing(dictionary: &Dictionary) -> Session<'_> {
        let mut session = session(dictionary);
        session.handle(Input::StartPlaying, 0.0);
        session.tick(SPLASH_FADE);
        session
    }

    fn type_word(session: &mut Session<'_>, word: &str, now: f64) {
        for c in word.chars() {
            session.handle(Input::Letter(c), now);
        }
    }

    fn submit(session: &mut Session<'_>, word: &str, now: f64) {
        type_word(session, word, now);
        session.handle(Input::Submit, now);
    }

    #[test]
    fn splash_fades_then_reveals_board() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);
        assert_eq!(session.view(0.0).phase, Phase::Splash);

        session.handle(Input::StartPlaying, 1.0);
        type_word(&mut session, "blab", 1.1);
        session.tick(1.2);
        let view = session.view(1.2);
        assert_eq!(view.phase, Phase::Splash);
        assert!(view.splash_opacity > 0.0 && view.splash_opacity < 1.0);
        assert!(view.guess.is_empty());

        session.tick(1.5);
        let view = session.view(1.5);
        assert_eq!(view.phase, Phase::Playing);
        assert!(view.splash_opacity.abs() < EPS);
    }

    #[test]
    fn reset_mid_fade_ignores_stale_reveal() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        session.handle(Input::StartPlaying, 0.0);
        let letters: LetterSet = "bailnpt".parse().unwrap();
        session.reset(Some(letters));
        assert_eq!(session.generation(), 1);
        assert_eq!(session.pending_timers(), 1);

        session.tick(1.0);
        assert_eq!(session.pending_timers(), 0);
        let view = session.view(1.0);
        assert_eq!(view.phase, Phase::Splash);
        assert!((view.splash_opacity - 1.0).abs() < EPS);
    }

    #[test]
    fn only_puzzle_letters_are_typed() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);

        type_word(&mut session, "bxaz", 1.0);
        assert_eq!(session.state().current_guess(), "BA");

        session.handle(Input::Delete, 1.0);
        assert_eq!(session.state().current_guess(), "B");
        session.handle(Input::ClearGuess, 1.0);
        assert_eq!(session.state().current_guess(), "");
    }

    #[test]
    fn submit_shows_then_hides_feedback() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);

        submit(&mut session, "labia", 1.0);
        assert_eq!(session.state().current_points(), 5);
        assert!(session.view(1.0).feedback.is_none());

        let feedback = session.view(1.3).feedback.unwrap();
        assert_eq!(feedback.message, "Nice!");
        assert_eq!(feedback.points, 5);
        assert!((feedback.opacity - 1.0).abs() < EPS);

        session.tick(2.0);
        assert!(session.view(2.1).feedback.is_some());
        assert!(session.view(2.5).feedback.is_none());
    }

    #[test]
    fn new_submit_preempts_pending_hide() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);

        submit(&mut session, "lab", 1.0);
        submit(&mut session, "plaint", 1.8);

        // First hide timer is due but belongs to the older feedback
        session.tick(2.0);
        let feedback = session.view(2.4).feedback.unwrap();
        assert_eq!(feedback.message, MISSING_CENTER);
        assert!((feedback.opacity - 1.0).abs() < EPS);

        session.tick(2.8);
        assert!(session.view(3.2).feedback.is_none());
    }

    #[test]
    fn rejected_guess_keeps_score() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);

        submit(&mut session, "bla", 1.0);
        assert_eq!(session.view(1.3).feedback.unwrap().message, TOO_SHORT);
        assert_eq!(session.state().current_points(), 0);
        assert_eq!(session.state().current_guess(), "");
    }

    #[test]
    fn shuffle_fades_and_reorders() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);
        let before = session.state().letters().sorted_outer();

        session.handle(Input::Shuffle, 1.0);
        assert!(session.view(1.3).outer_opacity.abs() < EPS);

        session.tick(1.3);
        assert_eq!(session.state().letters().sorted_outer(), before);
        assert_eq!(session.state().letters().center(), 'b');
        assert!((session.view(1.6).outer_opacity - 1.0).abs() < EPS);
    }

    #[test]
    fn word_list_blocks_typing_and_pages() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);
        let words = [
            "labia", "albit", "blab", "pinball", "plantib", "tibia", "banal", "ablin", "nabit",
        ];
        for (i, word) in words.iter().enumerate() {
            submit(&mut session, word, 1.0 + i as f64);
        }
        assert_eq!(session.state().found_words().len(), 9);

        // Scrolling is ignored while the list is closed
        session.handle(Input::ScrollRight, 20.0);
        assert_eq!(session.target_page(), 0);

        session.handle(Input::ToggleWordList, 20.0);
        assert!(session.word_list_open());
        type_word(&mut session, "bl", 20.0);
        assert_eq!(session.state().current_guess(), "");

        // 2 rows per column: 5 columns, 3 pages
        session.handle(Input::ScrollRight, 20.0);
        session.handle(Input::ScrollRight, 20.0);
        session.handle(Input::ScrollRight, 20.0);
        assert_eq!(session.target_page(), 2);

        let page = session.view(21.0).word_list.unwrap();
        assert_eq!(page.found_count, 9);
        assert_eq!(page.dots.unwrap().current, 2);

        session.handle(Input::ScrollLeft, 21.0);
        assert_eq!(session.target_page(), 1);

        session.handle(Input::ToggleWordList, 22.0);
        assert!(!session.word_list_open());
        assert!(session.view(22.0).recent.is_some());
    }

    #[test]
    fn resize_returns_to_first_page() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);
        for (i, word) in ["labia", "albit", "blab", "pinball", "plantib"].iter().enumerate() {
            submit(&mut session, word, 1.0 + i as f64);
        }
        session.handle(Input::ToggleWordList, 10.0);
        session.handle(Input::ScrollRight, 10.0);
        assert_eq!(session.target_page(), 1);

        session.handle(
            Input::Resize {
                strip_width: 30,
                main_height: 10,
            },
            10.1,
        );
        assert_eq!(session.target_page(), 0);
    }

    #[test]
    fn next_frame_follows_animations_timers_and_cursor() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);
        assert_eq!(session.next_frame(0.0), None);

        session.handle(Input::StartPlaying, 0.0);
        assert_eq!(session.next_frame(0.1), Some(0.1));
        session.tick(SPLASH_FADE);

        // Idle board: only the cursor blink
        assert_eq!(session.next_frame(1.2), Some(1.5));

        submit(&mut session, "labia", 2.0);
        assert_eq!(session.next_frame(2.1), Some(2.1));

        // Fade-in and ticker are done; the list hides the cursor, so the hide timer is next
        session.handle(Input::ToggleWordList, 2.6);
        assert_eq!(session.next_frame(2.6), Some(3.0));
    }

    #[test]
    fn reset_clears_game_and_presentation() {
        let dictionary = dictionary();
        let mut session = playing(&dictionary);
        submit(&mut session, "labia", 1.0);
        session.handle(Input::ToggleWordList, 1.5);

        let letters: LetterSet = "bailnpt".parse().unwrap();
        session.reset(Some(letters));
        session.tick(5.0);

        let view = session.view(5.0);
        assert_eq!(view.phase, Phase::Splash);
        assert_eq!(view.status.current_points, 0);
        assert!(view.feedback.is_none());
        assert!(!session.word_list_open());
        assert!(session.state().found_words().is_empty());
    }

    #[test]
    fn reset_event_generates_a_puzzle() {
        // Nothing in this dictionary makes a good puzzle
        let dictionary = dictionary();
        let mut session = playing(&dictionary);
        session.handle(Input::Reset, 1.0);

        let view = session.view(1.0);
        assert_eq!(view.phase, Phase::Splash);
        assert_eq!(view.center, '?');
        assert_eq!(view.status.total_points, 0);
    }
}
