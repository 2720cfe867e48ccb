//! Terminal output formatting
//!
//! Display utilities for CLI results and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::print_answers;
