use super::button::{Button, Operator};
use super::reducer::reduce;
use super::state::{CalcState, Mode};

/// Owns the calculator state and turns button presses into display text.
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    state: CalcState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CalcState) -> Self {
        Self { state }
    }

    /// Handles one press and returns the new display text.
    pub fn handle(&mut self, button: Button) -> &str {
        let changed = reduce(&mut self.state, button);
        tracing::debug!(
            button = button.name(),
            changed,
            display = %self.state.display,
            "button handled"
        );
        self.state.display.as_str()
    }

    pub fn display(&self) -> &str {
        self.state.display.as_str()
    }

    pub fn accumulator(&self) -> f64 {
        self.state.mode.accumulator()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.mode.pending_operator()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/engine.rs"]
mod tests;
