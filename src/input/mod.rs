//! Terminal input module.

pub mod handler;

pub use handler::{map_key, should_quit};
