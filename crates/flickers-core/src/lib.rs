//! Flickers Calculator core
//!
//! The headless engines behind the calculator: a keypad-driven arithmetic
//! engine with scientific functions, a unit converter over static tables,
//! and a bounded history ledger. Persistence goes through a pluggable
//! key-value store so the engines stay free of any storage medium.
//!
//! # Example
//!
//! ```rust
//! use flickers_core::prelude::*;
//!
//! // Keypad entry, evaluated left to right
//! let mut calc = Calculator::new();
//! for key in ["2", "+", "3", "*", "4", "="] {
//!     calc.apply(Action::from_key(key).unwrap());
//! }
//! assert_eq!(calc.current_operand(), "20");
//! assert_eq!(calc.history().recent_lines(10), ["5 * 4 = 20", "2 + 3 = 5"]);
//!
//! // Unit conversion
//! let out = convert("temperature", "°C", "°F", "100").unwrap();
//! assert_eq!(out.to_string(), "212");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calc;
pub mod convert;
pub mod driver;
pub mod store;
pub mod theme;
pub mod update;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calc::{
        Action, Calculator, CalculatorObserver, CalculatorState, DisplaySnapshot, HistoryEntry,
        HistoryLedger, InputToken, Operator, ScientificFunction, UnknownKey,
    };
    pub use crate::convert::{
        bmi, convert, discount, Category, ConversionError, ConversionOutput, ConversionRequest,
        ConversionResult,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
    pub use crate::theme::Theme;
    pub use crate::update::{check_for_update, Release, ReleaseFeed, UpdateStatus, Version};
}
