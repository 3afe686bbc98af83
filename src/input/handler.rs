//! Phase-aware key mapping for terminal input.
//!
//! Maps crossterm key events to game actions. The mapping depends on the
//! session phase because Enter means "start", "submit", or "play again"
//! depending on where the session is. Callers must check `should_quit`
//! before mapping, so quit keys never reach the guess buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, Phase};

/// Quit keys: `q`, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to an action for the given phase.
///
/// Returns `None` for keys that mean nothing right now. `p` and `r` are
/// reserved control keys and are never pushed into the guess buffer.
pub fn map_key(key: KeyEvent, phase: Phase) -> Option<GameAction> {
    // Modified keys are control chords, not text entry.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match phase {
        Phase::NotStarted => match key.code {
            KeyCode::Enter => Some(GameAction::Start),
            _ => None,
        },
        Phase::InProgress => match key.code {
            KeyCode::Enter => Some(GameAction::Submit),
            KeyCode::Backspace => Some(GameAction::Backspace),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            KeyCode::Char(c) => Some(GameAction::Push(c)),
            _ => None,
        },
        Phase::Paused => match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Resume),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            _ => None,
        },
        Phase::Finished => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            _ => None,
        },
    }
}
