//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Inclusive bounds for the secret target value.
pub const TARGET_MIN: u8 = 1;
pub const TARGET_MAX: u8 = 10;

/// Default attempt ceiling for a session (bounded rules).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;

/// How long the win celebration stays on screen.
pub const CELEBRATION_MS: u32 = 5_000;

/// Cap on the raw guess buffer so oversized paste input cannot distort the
/// input field. Long enough to hold any out-of-range number worth reporting.
pub const GUESS_BUFFER_MAX: usize = 8;

/// Stage of a session's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    InProgress,
    Paused,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        }
    }

    /// Whether the entry field accepts edits in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::InProgress)
    }
}

/// Terminal result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    /// Append one character to the guess buffer.
    Push(char),
    /// Remove the last character from the guess buffer.
    Backspace,
    Submit,
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::Push(_) => "push",
            GameAction::Backspace => "backspace",
            GameAction::Submit => "submit",
            GameAction::Restart => "restart",
        }
    }
}
