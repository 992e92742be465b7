//! Terminal frontend plumbing (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the calculator core builds without terminal
//! crates.

pub mod keymap;
pub mod keypad;
pub mod terminal_guard;

pub use keymap::{Key, KeyAction, Keymap};
pub use keypad::KeypadLayout;
pub use terminal_guard::{TerminalGuard, TerminationSignal};
