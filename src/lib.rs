//! zcalc - a single-screen four-function calculator.
//!
//! Modules:
//! - kernel: headless engine (button -> state -> display text)
//! - services: settings file
//! - tui: terminal plumbing (keymap, keypad layout, terminal guard)
//! - app: event wiring and rendering

pub mod kernel;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;

pub use kernel::{Button, CalculatorEngine, Operator};
