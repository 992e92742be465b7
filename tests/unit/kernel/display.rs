use super::*;

#[test]
fn digits_replace_lone_zero_then_append() {
    let mut text = DisplayText::zero();
    text.push_digit('0');
    assert_eq!(text.as_str(), "0");
    text.push_digit('4');
    assert_eq!(text.as_str(), "4");
    text.push_digit('2');
    assert_eq!(text.as_str(), "42");
}

#[test]
fn decimal_is_added_once() {
    let mut text = DisplayText::zero();
    assert!(text.push_decimal());
    assert!(!text.push_decimal());
    assert_eq!(text.as_str(), "0.");
}

#[test]
fn toggle_sign_skips_zero() {
    let mut text = DisplayText::zero();
    assert!(!text.toggle_sign());
    assert_eq!(text.as_str(), "0");

    text.set("12.5".to_string());
    assert!(text.toggle_sign());
    assert_eq!(text.as_str(), "-12.5");
    assert!(text.toggle_sign());
    assert_eq!(text.as_str(), "12.5");
}

#[test]
fn transient_text_parses_as_zero() {
    assert_eq!(parse_or_zero("-"), 0.0);
    assert_eq!(parse_or_zero("."), 0.0);
    assert_eq!(parse_or_zero(""), 0.0);
    assert_eq!(parse_or_zero("12."), 12.0);
    assert_eq!(parse_or_zero("-0.25"), -0.25);
}

#[test]
fn general_format_drops_trailing_zeros() {
    assert_eq!(format_general(8.0), "8");
    assert_eq!(format_general(0.1 + 0.2), "0.3");
    assert_eq!(format_general(-2.5), "-2.5");
    assert_eq!(format_general(100.0), "100");
}

#[test]
fn general_format_keeps_six_significant_digits() {
    assert_eq!(format_general(1.0 / 3.0), "0.333333");
    assert_eq!(format_general(2.0 / 3.0), "0.666667");
    assert_eq!(format_general(123456.7), "123457");
    assert_eq!(format_general(0.0001234567), "0.000123457");
}

#[test]
fn general_format_switches_to_exponent_form() {
    assert_eq!(format_general(1_000_000.0), "1e+06");
    assert_eq!(format_general(999_999.7), "1e+06");
    assert_eq!(format_general(-2.5e10), "-2.5e+10");
    assert_eq!(format_general(0.00001), "1e-05");
    assert_eq!(format_general(1.5e-300), "1.5e-300");
}

#[test]
fn general_format_non_finite_values() {
    assert_eq!(format_general(f64::INFINITY), "inf");
    assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_general(f64::NAN), "nan");
}

#[test]
fn default_format_keeps_fraction() {
    assert_eq!(format_default(0.5), "0.5");
    assert_eq!(format_default(1.0), "1.0");
}

#[test]
fn reset_returns_to_zero() {
    let mut text = DisplayText::zero();
    text.set("-3.75".to_string());
    text.reset();
    assert!(text.is_zero());
    assert_eq!(text.to_string(), "0");
}
