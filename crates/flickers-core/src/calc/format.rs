//! Number formatting and operand parsing
//!
//! Operands are kept as text, so every transition of the engine goes through
//! [`parse_operand`] on the way in and [`format_number`] on the way out.

/// Formats a value as the shortest decimal string that round-trips.
///
/// Magnitudes in `[1e-6, 1e21)` are written positionally, everything else in
/// exponent form (`1.5e+21`, `1e-7`). Non-finite values are spelled
/// `Infinity`, `-Infinity` and `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2246467991473532e-16"
    let exp_form = format!("{:e}", value.abs());
    let (mantissa, exponent) = exp_form.split_once('e').unwrap_or((exp_form.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;
    let sign = if value < 0.0 { "-" } else { "" };

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let exp_abs = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{exp_sign}{exp_abs}")
        } else {
            let (lead, rest) = digits.split_at(1);
            format!("{lead}.{rest}e{exp_sign}{exp_abs}")
        }
    };

    format!("{sign}{body}")
}

/// Formats a converter result: six decimals, trailing zeros and a trailing
/// decimal point stripped.
#[must_use]
pub fn format_fixed_trimmed(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let fixed = format!("{value:.6}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a value with exactly two decimals.
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    if fixed == "-0.00" {
        "0.00".to_string()
    } else {
        fixed
    }
}

/// Rounds to the given number of decimal places.
///
/// Values too large to scale are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Parses the leading number of an operand.
///
/// Accepts the longest prefix that forms a decimal number (sign, digits,
/// fraction, exponent) so `"12("` reads as 12. Also accepts the spelled-out
/// `Infinity` forms produced by [`format_number`]. Returns `None` when no
/// number can be read.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = &text[end..];
    if rest.starts_with("Infinity") {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Parses an operand and keeps it only when finite.
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    parse_operand(text).filter(|v| v.is_finite())
}
