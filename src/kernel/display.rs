//! Display text and the two number-formatting paths.
//!
//! The display is edited character by character, so it is usually a prefix of
//! a valid numeral. Anything that does not parse reads as `0.0`.

use std::fmt;

pub const ZERO: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn zero() -> Self {
        Self(ZERO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == ZERO
    }

    pub fn value(&self) -> f64 {
        parse_or_zero(&self.0)
    }

    pub fn push_digit(&mut self, digit: char) {
        if self.is_zero() {
            self.0.clear();
        }
        self.0.push(digit);
    }

    /// Returns `false` when a point is already present.
    pub fn push_decimal(&mut self) -> bool {
        if self.0.contains('.') {
            return false;
        }
        self.0.push('.');
        true
    }

    /// `"0"` has no negative form and is left untouched.
    pub fn toggle_sign(&mut self) -> bool {
        if let Some(rest) = self.0.strip_prefix('-') {
            self.0 = rest.to_string();
            return true;
        }
        if self.is_zero() {
            return false;
        }
        self.0.insert(0, '-');
        true
    }

    pub fn set(&mut self, text: String) {
        self.0 = text;
    }

    pub fn reset(&mut self) {
        self.0.clear();
        self.0.push_str(ZERO);
    }
}

impl Default for DisplayText {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lenient parse: transient states like `"-"` or `"."` read as zero.
pub fn parse_or_zero(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

/// Significant digits kept by `format_general`.
pub const GENERAL_PRECISION: i32 = 6;

/// Arithmetic results, printf `%g` style: six significant digits, trailing
/// zeros dropped, `1e+06` exponent form outside `1e-4..1e6`.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Exponent after rounding to the target precision, so 999999.5 -> 1e+06.
    let sci = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..GENERAL_PRECISION).contains(&exp) {
        let decimals = (GENERAL_PRECISION - 1 - exp) as usize;
        let fixed = format!("{:.*}", decimals, value);
        return trim_fraction(&fixed).to_string();
    }

    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
}

fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Percent results: the default float rendering, which keeps a fractional
/// part (`1.0`, `0.5`).
pub fn format_default(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/display.rs"]
mod tests;
