//! tui-guess: a terminal number-guessing game.
//!
//! The crate splits into a pure, deterministic game core and thin terminal
//! layers around it: `core` owns the session state machine, `input` maps key
//! events to actions, and `term` renders snapshots of the session.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
