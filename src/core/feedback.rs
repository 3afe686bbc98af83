//! Feedback module - user-facing validation errors and result messages
//!
//! Everything here is recoverable, user-directed text. None of these are
//! program errors, so they are plain enums rather than `Error` impls.

use crate::types::{TARGET_MAX, TARGET_MIN};

/// Why the most recent submission was rejected or ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Buffer was empty or did not parse as a base-10 integer.
    InvalidNumber,
    /// Parsed fine but fell outside `TARGET_MIN..=TARGET_MAX`.
    OutOfRange,
    /// The attempt ceiling was reached without a match.
    AttemptsExhausted,
}

impl GuessError {
    pub fn message(&self) -> &'static str {
        match self {
            GuessError::InvalidNumber => "Please enter a valid number.",
            GuessError::OutOfRange => "Your guess must be between 1 and 10.",
            GuessError::AttemptsExhausted => "Out of attempts!",
        }
    }
}

/// Non-error notification raised by a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Correct on the very first valid attempt.
    WinFirstTry,
    /// Correct after `attempts` valid attempts (attempts > 1).
    Win { attempts: u32 },
    /// Valid guess, wrong value, session continues.
    Incorrect,
    /// Session ended without a match; reveal the target.
    Lose { target: u8 },
}

impl Feedback {
    /// Render the notification for display.
    pub fn message(&self) -> String {
        match self {
            Feedback::WinFirstTry => "Genius! You got it on the first try.".to_string(),
            Feedback::Win { attempts } => {
                format!("You guessed the number in {} attempts.", attempts)
            }
            Feedback::Incorrect => "Wrong guess! Try again.".to_string(),
            Feedback::Lose { target } => format!("The number was {}.", target),
        }
    }
}

/// Range check shared by session validation and tests.
pub fn in_target_range(value: i64) -> bool {
    value >= TARGET_MIN as i64 && value <= TARGET_MAX as i64
}
