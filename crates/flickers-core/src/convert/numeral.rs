//! Integer numeral-base conversion (BIN, OCT, DEC, HEX)

use super::{ConversionError, ConversionResult};
use std::fmt;

/// Numeral base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10
    Decimal,
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 16
    Hexadecimal,
}

impl Radix {
    /// All bases in converter order
    pub const ALL: [Self; 4] = [Self::Decimal, Self::Binary, Self::Octal, Self::Hexadecimal];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decimal => "DEC",
            Self::Binary => "BIN",
            Self::Octal => "OCT",
            Self::Hexadecimal => "HEX",
        }
    }

    /// Integer radix
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }

    /// Looks up a base by label, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|radix| radix.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a digit string in the given base.
///
/// Accepts an optional leading `-` and either case of hex digits.
pub fn parse_digits(input: &str, radix: Radix) -> ConversionResult<i64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(ConversionError::InvalidInput(input.to_string()));
    }
    if !digits.chars().all(|c| c.is_digit(radix.radix())) {
        return Err(ConversionError::InvalidDigit {
            radix: radix.radix(),
            input: input.to_string(),
        });
    }
    i64::from_str_radix(trimmed, radix.radix())
        .map_err(|_| ConversionError::InvalidInput(input.to_string()))
}

/// Renders an integer in the given base with upper-case hex digits
#[must_use]
pub fn render(value: i64, radix: Radix) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let digits = match radix {
        Radix::Decimal => magnitude.to_string(),
        Radix::Binary => format!("{magnitude:b}"),
        Radix::Octal => format!("{magnitude:o}"),
        Radix::Hexadecimal => format!("{magnitude:X}"),
    };
    format!("{sign}{digits}")
}

/// Converts a digit string from one base to another
pub fn convert(input: &str, from: Radix, to: Radix) -> ConversionResult<String> {
    let value = parse_digits(input, from)?;
    Ok(render(value, to))
}
