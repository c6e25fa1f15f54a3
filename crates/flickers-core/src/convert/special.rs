//! Single-purpose calculators on the converter panel: discount and BMI

use super::{ConversionError, ConversionResult};
use crate::calc::format::{format_two_decimals, round_to};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price after a percentage discount, rounded to cents
pub fn discount(price: f64, discount_percent: f64) -> ConversionResult<f64> {
    if !price.is_finite() || !discount_percent.is_finite() {
        return Err(ConversionError::InvalidInput(format!(
            "price {price}, discount {discount_percent}%"
        )));
    }
    let discounted = price * (1.0 - discount_percent / 100.0);
    if !discounted.is_finite() {
        return Err(ConversionError::InvalidInput(format!(
            "price {price}, discount {discount_percent}%"
        )));
    }
    Ok(round_to(discounted, 2))
}

/// Advisory weight band for a body-mass index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiBand {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiBand {
    /// Classifies a BMI value
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-mass index with its advisory band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// Band of the unrounded value
    pub band: BmiBand,
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_two_decimals(self.bmi), self.band)
    }
}

/// Computes `weight / height²` from kilograms and metres
pub fn bmi(weight_kg: f64, height_m: f64) -> ConversionResult<BmiReport> {
    if !weight_kg.is_finite() || !height_m.is_finite() || height_m <= 0.0 {
        return Err(ConversionError::InvalidInput(format!(
            "weight {weight_kg} kg, height {height_m} m"
        )));
    }
    let raw = weight_kg / (height_m * height_m);
    if !raw.is_finite() {
        return Err(ConversionError::InvalidInput(format!(
            "weight {weight_kg} kg, height {height_m} m"
        )));
    }
    Ok(BmiReport {
        bmi: round_to(raw, 2),
        band: BmiBand::classify(raw),
    })
}
