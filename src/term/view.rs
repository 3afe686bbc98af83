//! GameView: maps a `SessionSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::types::{Outcome, Phase, TARGET_MAX, TARGET_MIN};

use crate::term::frame::{Frame, Line, Rgb, Span, TextStyle};

/// Inner width of the card, in columns.
const CARD_INNER_W: usize = 38;

/// Builds the game card for the current session state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into a bordered card frame.
    pub fn render(&self, snap: &SessionSnapshot) -> Frame {
        let mut body = Frame::default();

        self.draw_header(&mut body);
        body.push(Line::default());

        match snap.phase {
            Phase::NotStarted => self.draw_welcome(&mut body),
            Phase::InProgress | Phase::Paused => self.draw_round(&mut body, snap),
            Phase::Finished => self.draw_outcome(&mut body, snap),
        }

        frame_with_border(body)
    }

    fn draw_header(&self, body: &mut Frame) {
        body.push(centered("GUESS THE NUMBER", title_style()));
        body.push(centered(
            &format!("Pick a number from {} to {}", TARGET_MIN, TARGET_MAX),
            TextStyle::default().dim(),
        ));
    }

    fn draw_welcome(&self, body: &mut Frame) {
        body.push(centered("Press Enter to start", TextStyle::default()));
        body.push(Line::default());
        body.push(centered("q quit", hint_style()));
    }

    fn draw_round(&self, body: &mut Frame, snap: &SessionSnapshot) {
        let paused = snap.phase == Phase::Paused;

        // Entry field, with a cursor while it accepts input.
        let field_style = if paused {
            TextStyle::default().dim()
        } else {
            TextStyle::default()
        };
        let cursor = if paused { "" } else { "_" };
        body.push(Line::from_spans(vec![
            Span::new("  Your guess: ", label_style()),
            Span::new(format!("{}{}", snap.pending_guess, cursor), field_style),
        ]));
        body.push(Line::default());

        // Attempt counters.
        let mut counter = format!("  Attempts: {}", snap.attempts);
        if let Some(remaining) = snap.attempts_remaining {
            counter.push_str(&format!("   Remaining: {}", remaining));
        }
        body.push(Line::styled(counter, label_style()));

        // Most recent complaint or notification, one line.
        if let Some(err) = snap.last_error {
            body.push(Line::styled(
                format!("  {}", err.message()),
                error_style(),
            ));
        } else if let Some(feedback) = snap.feedback {
            body.push(Line::styled(
                format!("  {}", feedback.message()),
                feedback_style(),
            ));
        } else {
            body.push(Line::default());
        }

        body.push(Line::default());
        if paused {
            body.push(centered("PAUSED", overlay_style()));
            body.push(centered("p resume  r restart  q quit", hint_style()));
        } else {
            body.push(centered(
                "Enter submit  p pause  r restart  q quit",
                hint_style(),
            ));
        }
    }

    fn draw_outcome(&self, body: &mut Frame, snap: &SessionSnapshot) {
        match snap.outcome {
            Some(Outcome::Win) => {
                if snap.celebrating {
                    body.push(centered("* * * * * * * *", celebration_style()));
                }
                body.push(centered("YOU WIN!", win_style()));
            }
            Some(Outcome::Lose) => {
                body.push(centered("GAME OVER", overlay_style()));
            }
            // Finished without an outcome cannot happen; render nothing.
            None => {}
        }

        if let Some(feedback) = snap.feedback {
            body.push(centered(&feedback.message(), TextStyle::default()));
        }
        body.push(Line::default());
        body.push(centered("Press Enter to play again", TextStyle::default()));
        body.push(centered("q quit", hint_style()));
    }
}

/// Wrap body lines in a box border, padding every row to the card width.
fn frame_with_border(body: Frame) -> Frame {
    let inner_w = CARD_INNER_W.max(body.width());
    let border = border_style();

    let mut out = Frame::default();
    out.push(Line::styled(
        format!("┌{}┐", "─".repeat(inner_w)),
        border,
    ));
    for line in body.lines {
        let pad = inner_w.saturating_sub(line.width());
        let mut spans = vec![Span::new("│", border)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::new("│", border));
        out.push(Line::from_spans(spans));
    }
    out.push(Line::styled(
        format!("└{}┘", "─".repeat(inner_w)),
        border,
    ));
    out
}

/// Center `text` within the card width.
fn centered(text: &str, style: TextStyle) -> Line {
    let w = text.chars().count();
    let left = CARD_INNER_W.saturating_sub(w) / 2;
    Line::from_spans(vec![
        Span::raw(" ".repeat(left)),
        Span::new(text, style),
    ])
}

fn title_style() -> TextStyle {
    TextStyle::default().bold().fg(Rgb::new(240, 220, 80))
}

fn label_style() -> TextStyle {
    TextStyle::default().fg(Rgb::new(200, 200, 200))
}

fn hint_style() -> TextStyle {
    TextStyle::default().dim().fg(Rgb::new(140, 140, 140))
}

fn error_style() -> TextStyle {
    TextStyle::default().fg(Rgb::new(220, 80, 80))
}

fn feedback_style() -> TextStyle {
    TextStyle::default().fg(Rgb::new(100, 220, 120))
}

fn overlay_style() -> TextStyle {
    TextStyle::default().bold().fg(Rgb::new(255, 255, 255))
}

fn win_style() -> TextStyle {
    TextStyle::default().bold().fg(Rgb::new(100, 220, 120))
}

fn celebration_style() -> TextStyle {
    TextStyle::default().bold().fg(Rgb::new(240, 220, 80))
}

fn border_style() -> TextStyle {
    TextStyle::default().fg(Rgb::new(200, 200, 200))
}
