//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Raw mode plus alternate screen, queued commands, one flush per frame.
//! The UI is a small card, so every draw is a full redraw centered in the
//! current terminal size.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::frame::{Frame, Rgb, TextStyle};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the frame centered in the terminal.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let (term_w, term_h) = terminal::size().unwrap_or((80, 24));

        let frame_w = frame.width() as u16;
        let frame_h = frame.height() as u16;
        let start_x = term_w.saturating_sub(frame_w) / 2;
        let start_y = term_h.saturating_sub(frame_h) / 2;

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_style: Option<TextStyle> = None;
        for (row, line) in frame.lines.iter().enumerate() {
            let y = start_y.saturating_add(row as u16);
            if y >= term_h {
                break;
            }
            self.stdout.queue(cursor::MoveTo(start_x, y))?;
            for span in &line.spans {
                if current_style != Some(span.style) {
                    self.apply_style(span.style)?;
                    current_style = Some(span.style);
                }
                self.stdout.queue(Print(span.text.as_str()))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: TextStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
