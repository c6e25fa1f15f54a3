//! Keypad driver
//!
//! Replays key labels against a [`Calculator`] the way a keypad front end
//! would. Shared verification routines take any [`CalculatorDriver`], so the
//! same scenarios run against the in-process driver and anything else that
//! implements the trait.

use crate::calc::{Action, Calculator, DisplaySnapshot, HistoryLedger, InputToken, UnknownKey};

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses one key, e.g. `"7"`, `"+"`, `"="`, `"C"` or `"sin"`
    fn press(&mut self, key: &str) -> Result<(), UnknownKey>;

    /// Current display
    fn display(&self) -> DisplaySnapshot;

    /// Most recent history lines, newest first
    fn history_lines(&self, limit: usize) -> Vec<String>;

    /// Clear all (C)
    fn clear(&mut self);

    /// Presses every key of a whitespace-separated sequence.
    ///
    /// The whole sequence is parsed first; nothing is pressed if any key is
    /// unknown.
    fn enter_keys(&mut self, sequence: &str) -> Result<(), UnknownKey> {
        for action in parse_keys(sequence)? {
            self.press_action(action);
        }
        Ok(())
    }

    /// Applies an already parsed action
    fn press_action(&mut self, action: Action);
}

/// Parses a whitespace-separated key sequence.
///
/// A word is a key label, or a run of digits and decimal points such as
/// `"12.5"` that expands to one action per character.
pub fn parse_keys(sequence: &str) -> Result<Vec<Action>, UnknownKey> {
    let mut actions = Vec::new();
    for word in sequence.split_whitespace() {
        if let Some(action) = Action::from_key(word) {
            actions.push(action);
            continue;
        }
        let tokens: Option<Vec<InputToken>> = word.chars().map(InputToken::from_char).collect();
        match tokens {
            Some(tokens) => actions.extend(tokens.into_iter().map(Action::from)),
            None => return Err(UnknownKey(word.to_string())),
        }
    }
    Ok(actions)
}

/// In-process driver wrapping a [`Calculator`]
#[derive(Debug, Default)]
pub struct KeypadDriver {
    calculator: Calculator,
}

impl KeypadDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the underlying calculator mutably
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Consumes the driver, returning the calculator
    #[must_use]
    pub fn into_calculator(self) -> Calculator {
        self.calculator
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, key: &str) -> Result<(), UnknownKey> {
        let action = Action::from_key(key).ok_or_else(|| UnknownKey(key.to_string()))?;
        self.press_action(action);
        Ok(())
    }

    fn press_action(&mut self, action: Action) {
        self.calculator.apply(action);
    }

    fn display(&self) -> DisplaySnapshot {
        self.calculator.display()
    }

    fn history_lines(&self, limit: usize) -> Vec<String> {
        self.calculator.history().recent_lines(limit)
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }
}

// ===== Shared Scenarios =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2 + 3 =", "5"),
        ("10 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("20 ÷ 4 =", "5"),
    ] {
        driver.clear();
        assert_eq!(driver.enter_keys(keys), Ok(()));
        assert_eq!(driver.display().current, expected, "{keys}");
    }
    driver.clear();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter_keys("2 + 3 *"), Ok(()));
    let display = driver.display();
    assert_eq!(display.current, "5");
    assert_eq!(display.previous, "5 *");
    assert_eq!(driver.enter_keys("4 ="), Ok(()));
    assert_eq!(driver.display().current, "20");
    driver.clear();
}

/// Verifies IEEE results for division by zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter_keys("5 / 0 ="), Ok(()));
    assert_eq!(driver.display().current, "Infinity");
    driver.clear();
}

/// Verifies that each equals records one history line, newest first
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.enter_keys("1 + 1 ="), Ok(()));
    assert_eq!(driver.enter_keys("C 3 + 3 ="), Ok(()));
    let lines = driver.history_lines(HistoryLedger::DISPLAY_ENTRIES);
    assert!(lines.len() >= 2);
    assert_eq!(lines[0], "3 + 3 = 6");
    assert_eq!(lines[1], "1 + 1 = 2");
    driver.clear();
}

/// Runs every shared scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_history(driver);
}
