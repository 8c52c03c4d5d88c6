//! Core domain types for Wordle
//!
//! This module contains the letter classification, the scoring algorithm and
//! the feedback value. Everything here is pure and free of I/O.

mod feedback;
mod letter_state;
mod scoring;

pub use feedback::GuessFeedback;
pub use letter_state::LetterState;
pub use scoring::evaluate;
