//! Game state machine and presentation
//!
//! [`GameState`] holds the rules, [`Session`] drives it from input events
//! and timers, and [`derive_view`] turns both into a [`ViewModel`] for the renderer.

pub mod animation;
pub mod feedback;
pub mod paginator;
pub mod session;
pub mod state;
pub mod timers;
pub mod view;

pub use animation::{AnimatedValue, Animation};
pub use feedback::FeedbackEvent;
pub use paginator::{PageDots, Paginator, VisibleRow, WordCell, WordListPage};
pub use session::{Input, Session};
pub use state::{GameState, Phase};
pub use timers::{Timer, TimerKind, TimerQueue};
pub use view::{
    FeedbackView, GuessLetter, PresentationState, RecentStrip, RecentWord, StatusView, ViewModel,
    derive_view,
};
