//! Static linear unit tables
//!
//! Each factor is the value of one unit expressed in the category's base unit
//! (kilogram, metre per second, pascal, metre, litre, US dollar, second,
//! square metre). Labels are the names shown in the converter; aliases are
//! ASCII spellings accepted on input.

/// A unit with a linear scale factor relative to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    /// Display label
    pub label: &'static str,
    /// Alternative input spellings
    pub aliases: &'static [&'static str],
    /// Value of one unit in the base unit
    pub factor: f64,
}

impl LinearUnit {
    const fn new(label: &'static str, aliases: &'static [&'static str], factor: f64) -> Self {
        Self {
            label,
            aliases,
            factor,
        }
    }

    /// Returns true if `name` is this unit's label or one of its aliases
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.label == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

/// Finds a unit by label or alias
#[must_use]
pub fn lookup<'a>(table: &'a [LinearUnit], name: &str) -> Option<&'a LinearUnit> {
    let name = name.trim();
    table.iter().find(|unit| unit.matches(name))
}

/// Base unit: kilogram
pub const MASS: &[LinearUnit] = &[
    LinearUnit::new("кг", &["kg"], 1.0),
    LinearUnit::new("г", &["g"], 0.001),
    LinearUnit::new("мг", &["mg"], 0.000001),
    LinearUnit::new("т", &["t"], 1000.0),
    LinearUnit::new("фунт", &["lb"], 0.453592),
    LinearUnit::new("унция", &["oz"], 0.0283495),
];

/// Base unit: metre per second
pub const SPEED: &[LinearUnit] = &[
    LinearUnit::new("м/с", &["m/s"], 1.0),
    LinearUnit::new("км/ч", &["km/h", "kph"], 0.277778),
    LinearUnit::new("миль/ч", &["mph"], 0.44704),
    LinearUnit::new("узел", &["kn", "knot"], 0.514444),
    LinearUnit::new("фут/с", &["ft/s"], 0.3048),
];

/// Base unit: pascal
pub const PRESSURE: &[LinearUnit] = &[
    LinearUnit::new("Па", &["Pa"], 1.0),
    LinearUnit::new("кПа", &["kPa"], 1000.0),
    LinearUnit::new("МПа", &["MPa"], 1000000.0),
    LinearUnit::new("бар", &["bar"], 100000.0),
    LinearUnit::new("атм", &["atm"], 101325.0),
    LinearUnit::new("мм рт.ст.", &["mmHg"], 133.322),
    LinearUnit::new("psi", &[], 6894.76),
];

/// Base unit: metre
pub const LENGTH: &[LinearUnit] = &[
    LinearUnit::new("м", &["m"], 1.0),
    LinearUnit::new("см", &["cm"], 0.01),
    LinearUnit::new("мм", &["mm"], 0.001),
    LinearUnit::new("км", &["km"], 1000.0),
    LinearUnit::new("миля", &["mi"], 1609.34),
    LinearUnit::new("ярд", &["yd"], 0.9144),
    LinearUnit::new("фут", &["ft"], 0.3048),
    LinearUnit::new("дюйм", &["in"], 0.0254),
];

/// Base unit: litre
pub const VOLUME: &[LinearUnit] = &[
    LinearUnit::new("л", &["l", "L"], 1.0),
    LinearUnit::new("мл", &["ml", "mL"], 0.001),
    LinearUnit::new("м³", &["m3"], 1000.0),
    LinearUnit::new("галлон", &["gal"], 3.78541),
    LinearUnit::new("кварта", &["qt"], 0.946353),
    LinearUnit::new("пинта", &["pt"], 0.473176),
];

/// Base unit: US dollar.
///
/// Snapshot rates quoted per dollar (1 USD = 0.92 EUR), stored inverted so
/// every factor is the dollar value of one unit. Not refreshed at runtime.
pub const CURRENCY: &[LinearUnit] = &[
    LinearUnit::new("USD", &["usd"], 1.0),
    LinearUnit::new("EUR", &["eur"], 1.0 / 0.92),
    LinearUnit::new("RUB", &["rub"], 1.0 / 92.5),
    LinearUnit::new("GBP", &["gbp"], 1.0 / 0.79),
    LinearUnit::new("JPY", &["jpy"], 1.0 / 149.5),
    LinearUnit::new("CNY", &["cny"], 1.0 / 7.24),
    LinearUnit::new("CHF", &["chf"], 1.0 / 0.88),
    LinearUnit::new("CAD", &["cad"], 1.0 / 1.36),
    LinearUnit::new("AUD", &["aud"], 1.0 / 1.53),
];

/// Base unit: second
pub const TIME: &[LinearUnit] = &[
    LinearUnit::new("сек", &["s", "sec"], 1.0),
    LinearUnit::new("мин", &["min"], 60.0),
    LinearUnit::new("час", &["h", "hour"], 3600.0),
    LinearUnit::new("день", &["d", "day"], 86400.0),
    LinearUnit::new("неделя", &["wk", "week"], 604800.0),
    LinearUnit::new("месяц", &["mo", "month"], 2592000.0),
    LinearUnit::new("год", &["yr", "year"], 31536000.0),
];

/// Base unit: square metre
pub const AREA: &[LinearUnit] = &[
    LinearUnit::new("м²", &["m2"], 1.0),
    LinearUnit::new("см²", &["cm2"], 0.0001),
    LinearUnit::new("мм²", &["mm2"], 0.000001),
    LinearUnit::new("км²", &["km2"], 1000000.0),
    LinearUnit::new("га", &["ha"], 10000.0),
    LinearUnit::new("ар", &["a", "are"], 100.0),
    LinearUnit::new("акр", &["ac", "acre"], 4046.86),
    LinearUnit::new("фут²", &["ft2"], 0.092903),
    LinearUnit::new("дюйм²", &["in2"], 0.00064516),
];
