//! Temperature conversion through a Celsius pivot

use std::fmt;

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureScale {
    /// All scales in converter order
    pub const ALL: [Self; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Looks up a scale by label, bare letter or name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "°C" | "C" | "c" | "celsius" => Some(Self::Celsius),
            "°F" | "F" | "f" | "fahrenheit" => Some(Self::Fahrenheit),
            "K" | "k" | "kelvin" => Some(Self::Kelvin),
            _ => None,
        }
    }

    /// Converts a reading on this scale to Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    /// Converts a Celsius reading to this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts `value` from one scale to another
#[must_use]
pub fn convert(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(
            convert(0.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit),
            32.0
        );
        assert_eq!(
            convert(0.0, TemperatureScale::Celsius, TemperatureScale::Kelvin),
            273.15
        );
    }

    #[test]
    fn test_boiling_point() {
        assert_eq!(
            convert(212.0, TemperatureScale::Fahrenheit, TemperatureScale::Celsius),
            100.0
        );
    }

    #[test]
    fn test_kelvin_to_celsius() {
        let c = convert(273.15, TemperatureScale::Kelvin, TemperatureScale::Celsius);
        assert!(c.abs() < 1e-9);
    }

    #[test]
    fn test_minus_forty_crossover() {
        assert_eq!(
            convert(-40.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit),
            -40.0
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(TemperatureScale::from_name("°C"), Some(TemperatureScale::Celsius));
        assert_eq!(TemperatureScale::from_name("F"), Some(TemperatureScale::Fahrenheit));
        assert_eq!(TemperatureScale::from_name("kelvin"), Some(TemperatureScale::Kelvin));
        assert_eq!(TemperatureScale::from_name("R"), None);
        for scale in TemperatureScale::ALL {
            assert_eq!(TemperatureScale::from_name(scale.label()), Some(scale));
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip(v in -1e6f64..1e6f64) {
            for from in TemperatureScale::ALL {
                for to in TemperatureScale::ALL {
                    let back = convert(convert(v, from, to), to, from);
                    prop_assert!((back - v).abs() < 1e-6);
                }
            }
        }
    }
}
