//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view maps session snapshots
//! into styled line frames with no I/O, and the renderer flushes frames to
//! the terminal. Keeping the view pure keeps it unit-testable.

pub mod frame;
pub mod renderer;
pub mod view;

pub use frame::{Frame, Line, Rgb, Span, TextStyle};
pub use renderer::TerminalRenderer;
pub use view::GameView;
