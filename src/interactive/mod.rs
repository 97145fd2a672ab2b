//! Interactive TUI interface
//!
//! Full-screen game driven by a `GameSession`: mode selection, guess grid,
//! recommendation and letter statistics.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
