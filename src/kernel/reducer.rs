use super::button::Button;
use super::display::{format_default, format_general};
use super::state::{CalcState, Mode};

/// Applies one button press. Returns whether anything observable changed.
pub fn reduce(state: &mut CalcState, button: Button) -> bool {
    match button {
        Button::Digit(d) => match char::from_digit(u32::from(d), 10) {
            Some(ch) => {
                let prev_zero = state.display.is_zero();
                state.display.push_digit(ch);
                !(prev_zero && ch == '0')
            }
            None => false,
        },
        Button::Decimal => state.display.push_decimal(),
        Button::ToggleSign => state.display.toggle_sign(),
        Button::Percent => {
            let value = state.display.value();
            set_display(state, format_default(value / 100.0))
        }
        Button::Clear => {
            let changed = !state.display.is_zero() || state.mode != Mode::Idle;
            state.display.reset();
            state.mode = Mode::Idle;
            changed
        }
        Button::Operator(op) => {
            let prev = state.mode;
            state.mode = Mode::PendingOp {
                op,
                left: state.display.value(),
            };
            let changed = !state.display.is_zero() || state.mode != prev;
            state.display.reset();
            changed
        }
        Button::Equal => match state.mode {
            Mode::Idle => false,
            Mode::PendingOp { op, left } => {
                let right = state.display.value();
                set_display(state, format_general(op.apply(left, right)))
            }
        },
    }
}

fn set_display(state: &mut CalcState, text: String) -> bool {
    if state.display.as_str() == text {
        return false;
    }
    state.display.set(text);
    true
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/reducer.rs"]
mod tests;
