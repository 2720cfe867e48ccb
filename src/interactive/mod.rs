//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, KeyAction, key_action, run_tui};
