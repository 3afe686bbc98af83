//! Core module - pure game logic with no external dependencies
//!
//! This module contains the session state machine, guess validation, and
//! feedback rules. It has zero dependencies on UI or I/O.

pub mod feedback;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use feedback::{Feedback, GuessError};
pub use rng::SimpleRng;
pub use session::{GameSession, SessionConfig};
pub use snapshot::SessionSnapshot;
