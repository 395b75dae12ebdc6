//! Game session logic
//!
//! The state machine plus the cumulative keyboard and the alert queue the
//! front ends layer on top of it.

pub mod alerts;
pub mod keyboard;
pub mod session;

pub use alerts::{Alert, AlertKind, AlertQueue, DEFAULT_MAX_ALERTS};
pub use keyboard::KeyboardState;
pub use session::{
    DEFAULT_MAX_ROWS, GuessRow, Phase, Rejection, Reveal, RevealStep, Session, SubmitOutcome,
};
