//! Wordle Game
//!
//! A Wordle game engine: score guesses against a secret word, track attempts,
//! and decide wins and losses. Ships with a terminal UI and a line mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterState;
//! use wordle_game::game::GameSession;
//!
//! let mut session = GameSession::new("speed", 6, 5);
//! let feedback = session.submit_guess("erase").unwrap();
//!
//! assert_eq!(feedback.to_symbols(), "Y--YY");
//! assert_eq!(feedback.states()[0], LetterState::Present);
//! assert!(!session.is_game_over());
//! ```

// Core domain types
pub mod core;

// Game sessions and rules
pub mod game;

// Word lists
pub mod wordlists;

// Configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
