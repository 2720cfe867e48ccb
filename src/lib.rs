//! Terminal Bee
//!
//! A seven-letter word puzzle for the terminal: make words from a ring of six
//! letters around a required center letter, climbing ranks as you score.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use terminal_bee::core::LetterSet;
//! use terminal_bee::dictionary::Dictionary;
//! use terminal_bee::game::GameState;
//! use terminal_bee::puzzle::Scorebook;
//!
//! let dictionary = Dictionary::new(["labia", "plantib", "tibia"]);
//! let letters: LetterSet = "bailnpt".parse().unwrap();
//! let scorebook = Scorebook::build(&dictionary, letters.center(), letters.outer(), 4);
//!
//! let mut game = GameState::new(letters, Arc::new(scorebook));
//! game.start_playing();
//! for c in "PLANTIB".chars() {
//!     game.append_letter(c);
//! }
//! let feedback = game.submit_guess().unwrap();
//! assert_eq!(feedback.message, "Pangram!");
//! assert_eq!(game.current_points(), 14);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word list loading
pub mod dictionary;

// Scorebooks and letter set generation
pub mod puzzle;

// Game state machine and presentation
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
