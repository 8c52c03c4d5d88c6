//! Terminal output formatting
//!
//! Display utilities for game rows, outcomes and statistics.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_feedback_row, write_outcome, write_statistics};
