//! Interactive TUI interface

pub mod app;
pub mod input;
pub mod rendering;

pub use app::{App, Timings, run_tui};
pub use input::{Command, map_key};
