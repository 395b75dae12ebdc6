//! Wordle Daily
//!
//! A daily five-letter word game: one target per calendar day, six guesses,
//! per-letter feedback and a cumulative keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::Word;
//! use wordle_daily::game::{Phase, Session, SubmitOutcome};
//! use wordle_daily::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::new([
//!     Word::new("crate").unwrap(),
//!     Word::new("trace").unwrap(),
//! ]);
//! let mut session = Session::new(Word::new("crate").unwrap(), &dictionary);
//!
//! for c in "crate".chars() {
//!     session.press_letter(c);
//! }
//! assert!(matches!(session.submit(), SubmitOutcome::Accepted(_)));
//! assert_eq!(session.finish_reveal(), Some(Phase::Won));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Daily target selection
pub mod daily;

// Game session state
pub mod game;

// Presentation state
pub mod render;

// Configuration file
pub mod config;

// Logging setup
pub mod telemetry;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
