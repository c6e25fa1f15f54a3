//! Basic and scientific calculator
//!
//! Operands are entered digit by digit and combined two at a time; choosing a
//! second operator evaluates the first (left to right, no precedence).

pub mod engine;
pub mod format;
pub mod history;
mod operations;

pub use engine::{Action, Calculator, CalculatorObserver, CalculatorState, DisplaySnapshot, InputToken};
pub use format::{format_number, parse_operand};
pub use history::{HistoryEntry, HistoryLedger};
pub use operations::{Operator, ScientificFunction, UnknownKey};
