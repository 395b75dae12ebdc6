//! Command implementations

pub mod check;
pub mod puzzle;
pub mod simple;
pub mod today;

pub use check::{CheckResult, check_guess};
pub use puzzle::{Puzzle, PuzzleChoice, choose_puzzle, random_target};
pub use simple::{GameSummary, run_simple};
pub use today::{TodayInfo, today_info};
