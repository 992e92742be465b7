//! Headless calculator core (button -> state -> display text).

pub mod button;
pub mod display;
pub mod engine;
pub mod reducer;
pub mod state;

pub use button::{Button, ButtonKind, KeypadCell, Operator, KEYPAD, KEYPAD_COLUMNS};
pub use display::DisplayText;
pub use engine::CalculatorEngine;
pub use reducer::reduce;
pub use state::{CalcState, Mode};
