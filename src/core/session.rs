//! Session module - the guessing game state machine
//!
//! Owns all mutable game state and exposes the event-handler operations the
//! UI layer calls. Pure and deterministic under a seed: no I/O, no clock.
//! Timing (the celebration countdown) advances only through `tick`.

use crate::core::feedback::{in_target_range, Feedback, GuessError};
use crate::core::rng::SimpleRng;
use crate::types::{
    GameAction, Outcome, Phase, CELEBRATION_MS, DEFAULT_MAX_ATTEMPTS, GUESS_BUFFER_MAX,
};

/// Configuration constants that survive a session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Attempt ceiling. `None` plays the unbounded rule set.
    pub max_attempts: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl SessionConfig {
    /// Unbounded rules: no attempt ceiling, play until a match.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }
}

/// Complete state for one playthrough.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    /// Secret value, drawn exactly once per session at start.
    target: Option<u8>,
    /// Raw, unvalidated input buffer. Validation happens on submit.
    pending_guess: String,
    /// Count of validated (numeric, in-range) guesses this session.
    attempts: u32,
    outcome: Option<Outcome>,
    last_error: Option<GuessError>,
    feedback: Option<Feedback>,
    /// Remaining celebration display time. Cosmetic only.
    celebration_ms: u32,
    /// Monotonic episode id (increments on each start).
    episode_id: u32,
    config: SessionConfig,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session with default (bounded) rules.
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, SessionConfig::default())
    }

    pub fn with_config(seed: u32, config: SessionConfig) -> Self {
        Self {
            phase: Phase::NotStarted,
            target: None,
            pending_guess: String::new(),
            attempts: 0,
            outcome: None,
            last_error: None,
            feedback: None,
            celebration_ms: 0,
            episode_id: 0,
            config,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> Option<u8> {
        self.target
    }

    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.config.max_attempts
    }

    /// Attempts left before exhaustion, if the rules are bounded.
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.config
            .max_attempts
            .map(|max| max.saturating_sub(self.attempts))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_error(&self) -> Option<GuessError> {
        self.last_error
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Whether the win celebration is still on screen.
    pub fn celebrating(&self) -> bool {
        self.celebration_ms > 0
    }

    /// Current RNG state (a restart continues the same stream).
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Begin a fresh playthrough. Valid from `NotStarted` or `Finished`;
    /// ignored otherwise. Draws a new target and zeroes everything else.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted | Phase::Finished => {}
            Phase::InProgress | Phase::Paused => return false,
        }

        self.target = Some(self.rng.draw_target());
        self.pending_guess.clear();
        self.attempts = 0;
        self.outcome = None;
        self.last_error = None;
        self.feedback = None;
        self.celebration_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::InProgress;
        true
    }

    /// Freeze guess submission. Valid only from `InProgress`; ignored
    /// (returns false) from every other phase. The input buffer survives.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Valid only from `Paused`; ignored otherwise.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::InProgress;
        true
    }

    /// Append a character to the guess buffer.
    ///
    /// Stores text verbatim without validating it; a non-numeric buffer is
    /// reported at submit time. Ignored while the entry field is disabled
    /// (any phase other than `InProgress`) and once the buffer is full.
    pub fn push_input(&mut self, ch: char) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        if ch.is_control() || self.pending_guess.chars().count() >= GUESS_BUFFER_MAX {
            return false;
        }
        self.pending_guess.push(ch);
        true
    }

    /// Remove the last character from the guess buffer.
    pub fn backspace(&mut self) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        self.pending_guess.pop().is_some()
    }

    /// Validate and score the pending guess. Valid only from `InProgress`.
    ///
    /// Invalid input (non-numeric or out of range) sets `last_error` and
    /// does not count as an attempt. A valid guess increments the attempt
    /// counter and either finishes the session (match, or exhaustion under
    /// bounded rules) or leaves it in progress with incorrect-guess feedback.
    pub fn submit_guess(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let Some(target) = self.target else {
            return false;
        };

        let parsed = match self.pending_guess.trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                self.last_error = Some(GuessError::InvalidNumber);
                self.feedback = None;
                return true;
            }
        };

        if !in_target_range(parsed) {
            self.last_error = Some(GuessError::OutOfRange);
            self.feedback = None;
            return true;
        }

        // Valid attempt: count it and consume the buffer.
        self.last_error = None;
        self.attempts += 1;
        self.pending_guess.clear();

        if parsed == target as i64 {
            self.phase = Phase::Finished;
            self.outcome = Some(Outcome::Win);
            self.feedback = Some(if self.attempts == 1 {
                Feedback::WinFirstTry
            } else {
                Feedback::Win {
                    attempts: self.attempts,
                }
            });
            self.celebration_ms = CELEBRATION_MS;
            return true;
        }

        if self.config.max_attempts == Some(self.attempts) {
            self.phase = Phase::Finished;
            self.outcome = Some(Outcome::Lose);
            self.last_error = Some(GuessError::AttemptsExhausted);
            self.feedback = Some(Feedback::Lose { target });
            return true;
        }

        self.feedback = Some(Feedback::Incorrect);
        true
    }

    /// Discard the session back to `NotStarted`. Valid from any phase.
    ///
    /// Configuration and the RNG stream position survive, so the next start
    /// draws an independently sampled target.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
        self.target = None;
        self.pending_guess.clear();
        self.attempts = 0;
        self.outcome = None;
        self.last_error = None;
        self.feedback = None;
        self.celebration_ms = 0;
    }

    /// Advance display timers. Returns true when something visible changed.
    ///
    /// The celebration countdown is the only timed element; letting a stale
    /// countdown run past a reset is harmless since it only drives a flag.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.celebration_ms == 0 {
            return false;
        }
        self.celebration_ms = self.celebration_ms.saturating_sub(elapsed_ms);
        true
    }

    /// Apply a game action, returning whether it changed state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::Push(ch) => self.push_input(ch),
            GameAction::Backspace => self.backspace(),
            GameAction::Submit => self.submit_guess(),
            GameAction::Restart => {
                self.reset();
                self.start()
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
