use super::*;
use crate::kernel::button::Operator;

fn press_all(state: &mut CalcState, buttons: &[Button]) {
    for button in buttons {
        reduce(state, *button);
    }
}

#[test]
fn operator_captures_left_operand_and_resets_display() {
    let mut state = CalcState::new();
    press_all(&mut state, &[Button::Digit(1), Button::Digit(2)]);

    assert!(reduce(&mut state, Button::MULTIPLY));
    assert_eq!(state.display.as_str(), "0");
    assert_eq!(
        state.mode,
        Mode::PendingOp {
            op: Operator::Multiply,
            left: 12.0
        }
    );
}

#[test]
fn latest_operator_wins() {
    let mut state = CalcState::new();
    press_all(&mut state, &[Button::Digit(7), Button::ADD]);
    reduce(&mut state, Button::SUBTRACT);

    // Second press re-reads the display, which was reset to "0".
    assert_eq!(
        state.mode,
        Mode::PendingOp {
            op: Operator::Subtract,
            left: 0.0
        }
    );
}

#[test]
fn equal_without_operator_is_noop() {
    let mut state = CalcState::new();
    press_all(&mut state, &[Button::Digit(4), Button::Digit(2)]);

    assert!(!reduce(&mut state, Button::Equal));
    assert_eq!(state.display.as_str(), "42");
    assert_eq!(state.mode, Mode::Idle);
}

#[test]
fn equal_keeps_pending_operator() {
    let mut state = CalcState::new();
    press_all(
        &mut state,
        &[Button::Digit(2), Button::ADD, Button::Digit(3), Button::Equal],
    );

    assert_eq!(state.display.as_str(), "5");
    assert_eq!(
        state.mode,
        Mode::PendingOp {
            op: Operator::Add,
            left: 2.0
        }
    );

    reduce(&mut state, Button::Equal);
    assert_eq!(state.display.as_str(), "7");
}

#[test]
fn clear_reports_change_only_when_something_was_set() {
    let mut state = CalcState::new();
    assert!(!reduce(&mut state, Button::Clear));

    press_all(&mut state, &[Button::Digit(3), Button::DIVIDE]);
    assert!(reduce(&mut state, Button::Clear));
    assert_eq!(state, CalcState::new());
}

#[test]
fn percent_uses_default_formatting() {
    let mut state = CalcState::new();
    press_all(
        &mut state,
        &[Button::Digit(1), Button::Digit(0), Button::Digit(0), Button::Percent],
    );
    assert_eq!(state.display.as_str(), "1.0");
}

#[test]
fn percent_of_transient_text_reads_zero() {
    let mut state = CalcState::new();
    state.display.set("-".to_string());
    reduce(&mut state, Button::Percent);
    assert_eq!(state.display.as_str(), "0.0");
}

#[test]
fn leading_zero_press_reports_no_change() {
    let mut state = CalcState::new();
    assert!(!reduce(&mut state, Button::Digit(0)));
    assert!(reduce(&mut state, Button::Digit(5)));
    assert!(reduce(&mut state, Button::Digit(0)));
    assert_eq!(state.display.as_str(), "50");
}

#[test]
fn percent_after_infinity_with_digits_reads_zero() {
    let mut state = CalcState::new();
    press_all(
        &mut state,
        &[Button::Digit(4), Button::DIVIDE, Button::Digit(0), Button::Equal],
    );
    assert_eq!(state.display.as_str(), "inf");

    reduce(&mut state, Button::Digit(5));
    assert_eq!(state.display.as_str(), "inf5");

    reduce(&mut state, Button::Percent);
    assert_eq!(state.display.as_str(), "0.0");
}
