//! Arithmetic engine: operand entry, operator chaining, scientific functions
//!
//! Every operation is a total transition of [`CalculatorState`]. Inputs that
//! cannot be evaluated leave the state untouched instead of surfacing an
//! error, so a keypad can never corrupt the display.

use crate::calc::format::{format_number, parse_finite};
use crate::calc::history::{HistoryEntry, HistoryLedger};
use crate::calc::operations::{Operator, ScientificFunction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operand and pending-operation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed or displayed, never empty
    pub current_operand: String,
    /// Left operand once an operator is chosen, empty when nothing is pending
    pub previous_operand: String,
    /// Operator waiting for its right operand
    pub pending_operator: Option<Operator>,
    /// When set, the next digit replaces the current operand
    pub reset_on_next_digit: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operator: None,
            reset_on_next_digit: false,
        }
    }
}

/// Token accepted by [`Calculator::append_digit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputToken {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Literal opening parenthesis, passed through unevaluated
    OpenParen,
}

impl InputToken {
    /// Character appended to the operand, `None` for out-of-range digits
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::OpenParen => Some('('),
        }
    }

    /// Maps a keypad character to a token
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' | ',' => Some(Self::Decimal),
            '(' => Some(Self::OpenParen),
            _ => None,
        }
    }
}

/// Every user action the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Opening parenthesis
    OpenParen,
    /// Binary operator
    Operator(Operator),
    /// Equals
    Equals,
    /// Clear all (C)
    Clear,
    /// Delete last character (DEL)
    Delete,
    /// Percent (%)
    Percent,
    /// Scientific panel key
    Function(ScientificFunction),
}

impl Action {
    /// Parses a key label such as `"7"`, `"+"`, `"="`, `"C"`, `"DEL"` or `"sin"`
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(token) = InputToken::from_char(c) {
                return Some(token.into());
            }
        }
        match key {
            "=" | "enter" => Some(Self::Equals),
            "C" | "c" | "AC" | "clear" => Some(Self::Clear),
            "DEL" | "del" | "⌫" | "backspace" | "delete" => Some(Self::Delete),
            "%" | "percent" => Some(Self::Percent),
            _ => Operator::from_symbol(key)
                .map(Self::Operator)
                .or_else(|| ScientificFunction::from_name(key).map(Self::Function)),
        }
    }
}

impl From<InputToken> for Action {
    fn from(token: InputToken) -> Self {
        match token {
            InputToken::Digit(d) => Self::Digit(d),
            InputToken::Decimal => Self::Decimal,
            InputToken::OpenParen => Self::OpenParen,
        }
    }
}

/// Text pushed to the display after every mutating operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Current operand
    pub current: String,
    /// `"<previous> <op>"` while an operator is pending, empty otherwise
    pub previous: String,
}

/// Receives display and history updates from a [`Calculator`]
pub trait CalculatorObserver: fmt::Debug {
    /// Called after every mutating operation
    fn display_changed(&mut self, snapshot: &DisplaySnapshot);

    /// Called after every ledger change with the most recent lines, newest first
    fn history_changed(&mut self, recent: &[String]);
}

/// The arithmetic engine
#[derive(Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    history: HistoryLedger,
    observers: Vec<Box<dyn CalculatorObserver>>,
}

impl Calculator {
    /// Creates a calculator with an empty, unpersisted history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator around an existing ledger
    #[must_use]
    pub fn with_history(history: HistoryLedger) -> Self {
        Self {
            state: CalculatorState::default(),
            history,
            observers: Vec::new(),
        }
    }

    /// Registers an observer and pushes the current display and history to it
    pub fn subscribe(&mut self, mut observer: Box<dyn CalculatorObserver>) {
        observer.display_changed(&self.display());
        observer.history_changed(&self.history.recent_lines(HistoryLedger::DISPLAY_ENTRIES));
        self.observers.push(observer);
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current operand text
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.state.current_operand
    }

    /// Returns the history ledger
    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> DisplaySnapshot {
        let previous = match self.state.pending_operator {
            Some(op) => format!("{} {}", self.state.previous_operand, op),
            None => String::new(),
        };
        DisplaySnapshot {
            current: self.state.current_operand.clone(),
            previous,
        }
    }

    /// Dispatches a keypad action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.append_digit(InputToken::Digit(d)),
            Action::Decimal => self.append_digit(InputToken::Decimal),
            Action::OpenParen => self.append_digit(InputToken::OpenParen),
            Action::Operator(op) => self.choose_operator(op),
            Action::Equals => self.compute(),
            Action::Clear => self.clear(),
            Action::Delete => self.delete(),
            Action::Percent => self.percent(),
            Action::Function(func) => self.scientific_function(func),
        }
    }

    /// Appends a digit, decimal point or parenthesis to the current operand
    pub fn append_digit(&mut self, token: InputToken) {
        let Some(c) = token.as_char() else {
            tracing::trace!(?token, "ignoring out-of-range digit");
            return;
        };
        if c == '.' && self.state.current_operand.contains('.') {
            return;
        }
        if self.state.reset_on_next_digit {
            self.state.current_operand.clear();
            self.state.reset_on_next_digit = false;
        }
        if self.state.current_operand == "0" && c != '.' {
            self.state.current_operand = c.to_string();
        } else {
            self.state.current_operand.push(c);
        }
        tracing::trace!(operand = %self.state.current_operand, "digit entered");
        self.notify_display();
    }

    /// Chooses an operator, evaluating any pending one first (left to right)
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.current_operand.is_empty() {
            return;
        }
        if !self.state.previous_operand.is_empty() {
            self.compute();
        }
        self.state.pending_operator = Some(op);
        self.state.previous_operand = self.state.current_operand.clone();
        self.state.reset_on_next_digit = true;
        tracing::debug!(operator = %op, lhs = %self.state.previous_operand, "operator chosen");
        self.notify_display();
    }

    /// Applies the pending operator and records the result in the history.
    ///
    /// Silently does nothing when either operand is not a finite number or no
    /// operator is pending.
    pub fn compute(&mut self) {
        let (Some(lhs), Some(rhs)) = (
            parse_finite(&self.state.previous_operand),
            parse_finite(&self.state.current_operand),
        ) else {
            return;
        };
        let Some(op) = self.state.pending_operator else {
            return;
        };

        let result = op.apply(lhs, rhs);
        let expression = format!(
            "{} {} {}",
            self.state.previous_operand, op, self.state.current_operand
        );
        tracing::debug!(%expression, result = %format_number(result), "computed");

        self.history.append(HistoryEntry::new(expression, result));
        self.notify_history();

        self.state.current_operand = format_number(result);
        self.state.previous_operand.clear();
        self.state.pending_operator = None;
        self.state.reset_on_next_digit = true;
        self.notify_display();
    }

    /// Resets to the initial state; the history is kept
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        tracing::debug!("cleared");
        self.notify_display();
    }

    /// Removes the last character, falling back to `"0"`
    pub fn delete(&mut self) {
        if self.state.current_operand.chars().count() <= 1 {
            self.state.current_operand = "0".to_string();
        } else {
            self.state.current_operand.pop();
        }
        self.notify_display();
    }

    /// Divides the current operand by 100
    pub fn percent(&mut self) {
        let Some(value) = parse_finite(&self.state.current_operand) else {
            return;
        };
        self.state.current_operand = format_number(value / 100.0);
        self.notify_display();
    }

    /// Applies a scientific function to the current operand.
    ///
    /// Constants overwrite the operand without arming the reset flag. A NaN
    /// result (square root of a negative, logarithm of a negative) is
    /// discarded and the state is left unchanged.
    pub fn scientific_function(&mut self, func: ScientificFunction) {
        if func == ScientificFunction::OpenParen {
            self.append_digit(InputToken::OpenParen);
            return;
        }
        if let Some(constant) = func.constant() {
            self.state.current_operand = format_number(constant);
            self.notify_display();
            return;
        }
        let Some(value) = parse_finite(&self.state.current_operand) else {
            return;
        };
        let result = func.evaluate(value);
        if result.is_nan() {
            tracing::debug!(function = %func, input = value, "discarding NaN result");
            return;
        }
        self.state.current_operand = format_number(result);
        self.state.reset_on_next_digit = true;
        tracing::debug!(function = %func, input = value, result, "function applied");
        self.notify_display();
    }

    /// Empties the history and its persisted copy
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.notify_history();
    }

    fn notify_display(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.display();
        for observer in &mut self.observers {
            observer.display_changed(&snapshot);
        }
    }

    fn notify_history(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let recent = self.history.recent_lines(HistoryLedger::DISPLAY_ENTRIES);
        for observer in &mut self.observers {
            observer.history_changed(&recent);
        }
    }
}
