//! Numeric normalization shared by the upgrader, the board and the engine.
//!
//! Anything that is not a finite number is worth 0. Values are never
//! rejected, only coerced.

use serde_json::Value;

/// Collapses NaN and infinities to 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parses user-entered text. Blank or non-numeric input reads as 0.
pub fn num_or_zero(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Returns the value only when it is a finite JSON number. Numeric strings
/// do not count.
pub fn json_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| number.is_finite())
}

/// Display formatting: two decimals at most, thousands separated,
/// trailing zeros dropped.
pub fn format_value(value: f64) -> String {
    let rounded = (finite_or_zero(value) * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let cents = (rounded.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction > 0 {
        let decimals = format!("{fraction:02}");
        out.push('.');
        out.push_str(decimals.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_finite_values_become_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.5), -3.5);
    }

    #[test]
    fn text_input_is_coerced() {
        assert_eq!(num_or_zero("42"), 42.0);
        assert_eq!(num_or_zero(" 7.5 "), 7.5);
        assert_eq!(num_or_zero(""), 0.0);
        assert_eq!(num_or_zero("abc"), 0.0);
        assert_eq!(num_or_zero("inf"), 0.0);
    }

    #[test]
    fn only_json_numbers_count() {
        assert_eq!(json_number(&json!(12)), Some(12.0));
        assert_eq!(json_number(&json!(1.25)), Some(1.25));
        assert_eq!(json_number(&json!("12")), None);
        assert_eq!(json_number(&Value::Null), None);
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-1.0), "-1");
        assert_eq!(format_value(1234567.891), "1,234,567.89");
        assert_eq!(format_value(8.5), "8.5");
        assert_eq!(format_value(999.999), "1,000");
        assert_eq!(format_value(-0.001), "0");
    }
}
