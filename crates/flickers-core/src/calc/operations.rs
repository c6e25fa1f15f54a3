//! Binary operators and scientific functions
//!
//! Closed enums map every key the calculator understands to a pure numeric
//! transformation, so an unknown operator name cannot reach the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary operator applied between the pending and current operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Looks up an operator by its symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" | "x" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN; it is not an error here.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Scientific panel function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScientificFunction {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Natural logarithm
    Ln,
    /// Base-10 logarithm
    Log,
    /// Square root
    Sqrt,
    /// The constant π
    Pi,
    /// Euler's number
    E,
    /// x²
    Square,
    /// Literal "(" appended to the operand
    OpenParen,
}

impl ScientificFunction {
    /// All functions in panel order
    pub const ALL: [Self; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log,
        Self::Sqrt,
        Self::Pi,
        Self::E,
        Self::Square,
        Self::OpenParen,
    ];

    /// Returns the key label
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Pi => "pi",
            Self::E => "e",
            Self::Square => "square",
            Self::OpenParen => "paren",
        }
    }

    /// Looks up a function by key label, including the panel glyphs
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            "sqrt" | "√" => Some(Self::Sqrt),
            "pi" | "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            "square" | "pow" | "x²" | "x^2" => Some(Self::Square),
            "paren" | "openParen" => Some(Self::OpenParen),
            _ => None,
        }
    }

    /// Value of a constant key, `None` for functions that consume input
    #[must_use]
    pub const fn constant(self) -> Option<f64> {
        match self {
            Self::Pi => Some(std::f64::consts::PI),
            Self::E => Some(std::f64::consts::E),
            _ => None,
        }
    }

    /// Evaluates the function on `x`.
    ///
    /// Trigonometric functions take degrees. Constants ignore `x`; the
    /// parenthesis key has no numeric meaning and yields NaN.
    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Ln => x.ln(),
            Self::Log => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Square => x.powi(2),
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::OpenParen => f64::NAN,
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Key label that maps to no operator, function or action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key: {0}")]
pub struct UnknownKey(pub String);
