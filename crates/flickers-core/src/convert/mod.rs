//! Unit conversion engine
//!
//! Pure functions over static tables. Unlike the calculator, structured input
//! is validated strictly: unknown categories, unknown units and malformed
//! values fail with a typed [`ConversionError`] and never yield NaN.

pub mod numeral;
pub mod special;
pub mod temperature;
pub mod units;

pub use numeral::Radix;
pub use special::{bmi, discount, BmiBand, BmiReport};
pub use temperature::TemperatureScale;
pub use units::LinearUnit;

use crate::calc::format::{format_fixed_trimmed, format_two_decimals};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion failure kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Category name not known
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unit name not part of the category
    #[error("Unknown unit '{unit}' for {category}")]
    UnknownUnit {
        /// Category searched
        category: Category,
        /// Name that was not found
        unit: String,
    },

    /// Value is not a finite number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Digit not valid in the source base
    #[error("Invalid digit for base {radix}: {input}")]
    InvalidDigit {
        /// Source radix
        radix: u32,
        /// Offending input
        input: String,
    },

    /// Unit table entry cannot be divided by
    #[error("Invalid unit '{unit}' for {category}")]
    InvalidUnit {
        /// Category of the unit
        category: Category,
        /// Unit label
        unit: String,
    },
}

/// Converter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mass
    Mass,
    /// Speed
    Speed,
    /// Pressure
    Pressure,
    /// Temperature
    Temperature,
    /// Length
    Length,
    /// Volume
    Volume,
    /// Currency (static snapshot rates)
    Currency,
    /// Time
    Time,
    /// Area
    Area,
    /// Integer numeral bases
    Numeral,
}

/// How a category converts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitTable {
    /// Scale factors relative to a base unit
    Linear(&'static [LinearUnit]),
    /// Celsius pivot
    Temperature,
    /// Integer radix re-rendering
    Numeral,
}

impl Category {
    /// All categories in converter order
    pub const ALL: [Self; 10] = [
        Self::Mass,
        Self::Speed,
        Self::Pressure,
        Self::Temperature,
        Self::Length,
        Self::Volume,
        Self::Currency,
        Self::Time,
        Self::Area,
        Self::Numeral,
    ];

    /// Category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Speed => "speed",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::Length => "length",
            Self::Volume => "volume",
            Self::Currency => "currency",
            Self::Time => "time",
            Self::Area => "area",
            Self::Numeral => "numeral",
        }
    }

    /// Conversion table of this category
    #[must_use]
    pub const fn table(self) -> UnitTable {
        match self {
            Self::Mass => UnitTable::Linear(units::MASS),
            Self::Speed => UnitTable::Linear(units::SPEED),
            Self::Pressure => UnitTable::Linear(units::PRESSURE),
            Self::Length => UnitTable::Linear(units::LENGTH),
            Self::Volume => UnitTable::Linear(units::VOLUME),
            Self::Currency => UnitTable::Linear(units::CURRENCY),
            Self::Time => UnitTable::Linear(units::TIME),
            Self::Area => UnitTable::Linear(units::AREA),
            Self::Temperature => UnitTable::Temperature,
            Self::Numeral => UnitTable::Numeral,
        }
    }

    /// Unit labels in table order
    #[must_use]
    pub fn units(self) -> Vec<&'static str> {
        match self.table() {
            UnitTable::Linear(table) => table.iter().map(|u| u.label).collect(),
            UnitTable::Temperature => TemperatureScale::ALL.iter().map(|s| s.label()).collect(),
            UnitTable::Numeral => Radix::ALL.iter().map(|r| r.label()).collect(),
        }
    }

    /// Initial source and target units: the first two of the table
    ///
    /// A single-unit table pairs the unit with itself.
    #[must_use]
    pub fn default_pair(self) -> (&'static str, &'static str) {
        match self.units().as_slice() {
            [from, to, ..] => (*from, *to),
            [only] => (*only, *only),
            [] => ("", ""),
        }
    }

    /// Converts a numeric value between two units of a linear or temperature
    /// category
    pub fn convert_value(self, from: &str, to: &str, value: f64) -> ConversionResult<f64> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value.to_string()));
        }
        match self.table() {
            UnitTable::Linear(table) => {
                let from_unit = self.linear_unit(table, from)?;
                let to_unit = self.linear_unit(table, to)?;
                if !(to_unit.factor > 0.0 && to_unit.factor.is_finite()) {
                    return Err(ConversionError::InvalidUnit {
                        category: self,
                        unit: to_unit.label.to_string(),
                    });
                }
                Ok(value * from_unit.factor / to_unit.factor)
            }
            UnitTable::Temperature => {
                let from = self.temperature_scale(from)?;
                let to = self.temperature_scale(to)?;
                Ok(temperature::convert(value, from, to))
            }
            UnitTable::Numeral => Err(ConversionError::InvalidInput(
                "numeral conversion takes a digit string".to_string(),
            )),
        }
    }

    /// Converts field input between two units of this category
    pub fn convert(self, from: &str, to: &str, input: &str) -> ConversionResult<ConversionOutput> {
        let output = if self == Self::Numeral {
            let from = Radix::from_name(from).ok_or_else(|| self.unknown_unit(from))?;
            let to = Radix::from_name(to).ok_or_else(|| self.unknown_unit(to))?;
            ConversionOutput::Digits(numeral::convert(input, from, to)?)
        } else {
            let value = parse_field(input)?;
            ConversionOutput::Number(self.convert_value(from, to, value)?)
        };
        tracing::debug!(category = %self, from, to, input, output = %output, "converted");
        Ok(output)
    }

    fn linear_unit(
        self,
        table: &'static [LinearUnit],
        name: &str,
    ) -> ConversionResult<&'static LinearUnit> {
        units::lookup(table, name).ok_or_else(|| self.unknown_unit(name))
    }

    fn temperature_scale(self, name: &str) -> ConversionResult<TemperatureScale> {
        TemperatureScale::from_name(name).ok_or_else(|| self.unknown_unit(name))
    }

    fn unknown_unit(self, name: &str) -> ConversionError {
        ConversionError::UnknownUnit {
            category: self,
            unit: name.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// Converted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConversionOutput {
    /// Linear or temperature result at full precision
    Number(f64),
    /// Numeral-base result
    Digits(String),
    /// Discounted price, already rounded to cents
    Amount(f64),
    /// Body-mass index and band
    Bmi(BmiReport),
}

impl ConversionOutput {
    /// Numeric value, if the result is numeric
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Amount(v) => Some(*v),
            Self::Bmi(report) => Some(report.bmi),
            Self::Digits(_) => None,
        }
    }

    /// Advisory label, if any
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Bmi(report) => Some(report.band.label()),
            _ => None,
        }
    }
}

impl fmt::Display for ConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_fixed_trimmed(*v)),
            Self::Digits(d) => f.write_str(d),
            Self::Amount(v) => f.write_str(&format_two_decimals(*v)),
            Self::Bmi(report) => write!(f, "{report}"),
        }
    }
}

/// Conversion request as supplied by a converter form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Category name
    pub category: String,
    /// Source unit
    pub from_unit: String,
    /// Target unit
    pub to_unit: String,
    /// Field text
    pub value: String,
}

impl ConversionRequest {
    /// Creates a request
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            value: value.into(),
        }
    }

    /// Runs the conversion
    pub fn execute(&self) -> ConversionResult<ConversionOutput> {
        convert(&self.category, &self.from_unit, &self.to_unit, &self.value)
    }
}

/// Converts `value` between two units of the named category
pub fn convert(category: &str, from: &str, to: &str, value: &str) -> ConversionResult<ConversionOutput> {
    category.parse::<Category>()?.convert(from, to, value)
}

/// Discount calculator as a converter output
pub fn discount_output(price: f64, discount_percent: f64) -> ConversionResult<ConversionOutput> {
    discount(price, discount_percent).map(ConversionOutput::Amount)
}

/// BMI calculator as a converter output
pub fn bmi_output(weight_kg: f64, height_m: f64) -> ConversionResult<ConversionOutput> {
    bmi(weight_kg, height_m).map(ConversionOutput::Bmi)
}

/// Parses a numeric form field; blank, non-numeric and non-finite text fail
pub fn parse_field(input: &str) -> ConversionResult<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConversionError::InvalidInput(input.to_string()))
}
