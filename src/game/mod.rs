//! Game state: sessions, input checks and statistics

mod error;
mod referee;
mod session;
pub mod stats;

pub use crate::config::GameConfig;
pub use error::{GuessError, GuessRejection};
pub use referee::submit_checked;
pub use session::{GameSession, GameStatus};
pub use stats::Statistics;
