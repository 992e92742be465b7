use super::button::Operator;
use super::display::DisplayText;

/// Whether an operator is waiting for its right-hand operand.
///
/// `PendingOp` survives `Equal`, so pressing equal again reapplies the same
/// operator and left operand to the freshly computed display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    PendingOp { op: Operator, left: f64 },
}

impl Mode {
    pub fn pending_operator(&self) -> Option<Operator> {
        match self {
            Mode::Idle => None,
            Mode::PendingOp { op, .. } => Some(*op),
        }
    }

    pub fn accumulator(&self) -> f64 {
        match self {
            Mode::Idle => 0.0,
            Mode::PendingOp { left, .. } => *left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcState {
    pub display: DisplayText,
    pub mode: Mode,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }
}
