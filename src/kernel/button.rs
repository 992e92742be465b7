/// Arithmetic operator awaiting its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Always `0..=9`.
    Digit(u8),
    Decimal,
    ToggleSign,
    Percent,
    Clear,
    Operator(Operator),
    Equal,
}

/// Visual category of a button. The frontend picks colors from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
}

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Button {
    pub const ADD: Button = Button::Operator(Operator::Add);
    pub const SUBTRACT: Button = Button::Operator(Operator::Subtract);
    pub const MULTIPLY: Button = Button::Operator(Operator::Multiply);
    pub const DIVIDE: Button = Button::Operator(Operator::Divide);

    /// Returns `None` for anything outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Button::Digit(value))
    }

    /// Every button in keypad order.
    pub fn all() -> impl Iterator<Item = Button> {
        KEYPAD.iter().flat_map(|row| row.iter().map(|cell| cell.button))
    }

    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Button::Decimal => ".",
            Button::ToggleSign => "-/+",
            Button::Percent => "%",
            Button::Clear => "AC",
            Button::Operator(Operator::Add) => "+",
            Button::Operator(Operator::Subtract) => "-",
            Button::Operator(Operator::Multiply) => "x",
            Button::Operator(Operator::Divide) => "/",
            Button::Equal => "=",
        }
    }

    pub fn kind(self) -> ButtonKind {
        match self {
            Button::Digit(_) | Button::Decimal => ButtonKind::Digit,
            Button::Operator(_) | Button::Equal => ButtonKind::Operator,
            Button::ToggleSign | Button::Percent | Button::Clear => ButtonKind::Function,
        }
    }

    /// Stable name used in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_NAMES.get(d as usize).copied().unwrap_or("unknown"),
            Button::Decimal => "decimal",
            Button::ToggleSign => "negative",
            Button::Percent => "percent",
            Button::Clear => "clear",
            Button::Operator(op) => op.name(),
            Button::Equal => "equal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if let Some(d) = DIGIT_NAMES.iter().position(|n| *n == name) {
            return Button::digit(d as u8);
        }
        let button = match name.as_str() {
            "decimal" | "dot" => Button::Decimal,
            "negative" | "toggle_sign" | "sign" => Button::ToggleSign,
            "percent" => Button::Percent,
            "clear" => Button::Clear,
            "add" => Button::ADD,
            "subtract" => Button::SUBTRACT,
            "multiply" => Button::MULTIPLY,
            "divide" => Button::DIVIDE,
            "equal" | "equals" => Button::Equal,
            _ => return None,
        };
        Some(button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadCell {
    pub button: Button,
    /// Number of grid columns the cell covers.
    pub span: u16,
}

const fn cell(button: Button) -> KeypadCell {
    KeypadCell { button, span: 1 }
}

pub const KEYPAD_COLUMNS: u16 = 4;

pub static KEYPAD: [&[KeypadCell]; 5] = [
    &[
        cell(Button::Clear),
        cell(Button::ToggleSign),
        cell(Button::Percent),
        cell(Button::DIVIDE),
    ],
    &[
        cell(Button::Digit(7)),
        cell(Button::Digit(8)),
        cell(Button::Digit(9)),
        cell(Button::MULTIPLY),
    ],
    &[
        cell(Button::Digit(4)),
        cell(Button::Digit(5)),
        cell(Button::Digit(6)),
        cell(Button::SUBTRACT),
    ],
    &[
        cell(Button::Digit(1)),
        cell(Button::Digit(2)),
        cell(Button::Digit(3)),
        cell(Button::ADD),
    ],
    &[
        KeypadCell {
            button: Button::Digit(0),
            span: 2,
        },
        cell(Button::Decimal),
        cell(Button::Equal),
    ],
];

#[cfg(test)]
#[path = "../../tests/unit/kernel/button.rs"]
mod tests;
