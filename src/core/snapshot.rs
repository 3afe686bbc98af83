//! Read-only view of a session for the rendering layer.
//!
//! The view consumes this instead of the live `GameSession` so rendering can
//! never mutate game state, and so tests can assert on exactly what the
//! renderer sees.

use crate::core::feedback::{Feedback, GuessError};
use crate::core::session::GameSession;
use crate::types::{Outcome, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub pending_guess: String,
    pub attempts: u32,
    pub attempts_remaining: Option<u32>,
    pub outcome: Option<Outcome>,
    pub last_error: Option<GuessError>,
    pub feedback: Option<Feedback>,
    /// Target value, exposed only once the session is finished.
    pub revealed_target: Option<u8>,
    pub celebrating: bool,
    pub episode_id: u32,
}

impl SessionSnapshot {
    /// Whether the session currently accepts guesses.
    pub fn playable(&self) -> bool {
        self.phase == Phase::InProgress
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            phase: session.phase(),
            pending_guess: session.pending_guess().to_string(),
            attempts: session.attempts(),
            attempts_remaining: session.attempts_remaining(),
            outcome: session.outcome(),
            last_error: session.last_error(),
            feedback: session.feedback(),
            revealed_target: if session.phase() == Phase::Finished {
                session.target()
            } else {
                None
            },
            celebrating: session.celebrating(),
            episode_id: session.episode_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    #[test]
    fn test_snapshot_hides_target_mid_session() {
        let mut session = GameSession::new(21);
        session.start();

        let snap = SessionSnapshot::from(&session);
        assert_eq!(snap.revealed_target, None);
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_reveals_target_when_finished() {
        let mut session = GameSession::new(21);
        session.start();
        let target = session.target().unwrap();
        for ch in target.to_string().chars() {
            session.push_input(ch);
        }
        session.submit_guess();

        let snap = SessionSnapshot::from(&session);
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.revealed_target, Some(target));
        assert_eq!(snap.outcome, Some(Outcome::Win));
        assert!(snap.celebrating);
        assert!(!snap.playable());
    }

    #[test]
    fn test_snapshot_mirrors_buffer_and_counters() {
        let mut session = GameSession::new(21);
        session.apply_action(GameAction::Start);
        session.apply_action(GameAction::Push('4'));
        session.apply_action(GameAction::Push('2'));

        let snap = SessionSnapshot::from(&session);
        assert_eq!(snap.pending_guess, "42");
        assert_eq!(snap.attempts, 0);
        assert_eq!(snap.episode_id, 1);
    }
}
