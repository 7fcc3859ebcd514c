use std::fmt;

use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision floating-point number.
    Decimal(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and logical operations, and required
    /// by `if` and `for` conditions.
    Bool(bool),
    /// A text value.
    Str(String),
}

/// The category of a [`Value`].
///
/// A variable remembers the kind of its first value and only accepts
/// compatible values afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Decimal,
    Boolean,
    String,
}

impl Kind {
    /// Returns `true` if a variable pinned to `self` may hold a value of
    /// kind `other`.
    ///
    /// Integers and decimals are interchangeable; booleans and strings only
    /// accept their own kind.
    ///
    /// # Example
    /// ```
    /// use bsl::interpreter::value::core::Kind;
    ///
    /// assert!(Kind::Int.accepts(Kind::Decimal));
    /// assert!(Kind::Decimal.accepts(Kind::Int));
    /// assert!(!Kind::String.accepts(Kind::Int));
    /// assert!(!Kind::Boolean.accepts(Kind::String));
    /// ```
    #[must_use]
    pub const fn accepts(self, other: Kind) -> bool {
        matches!((self, other),
                 (Self::Int | Self::Decimal, Self::Int | Self::Decimal)
                 | (Self::Boolean, Self::Boolean)
                 | (Self::String, Self::String))
    }

    /// Returns `true` for `Int` and `Decimal`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Decimal)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Decimal => write!(f, "decimal"),
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Int(n) => Self::Int(*n),
            LiteralValue::Decimal(d) => Self::Decimal(*d),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Decimal(_) => Kind::Decimal,
            Self::Bool(_) => Kind::Boolean,
            Self::Str(_) => Kind::String,
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for `if` and `for` conditions.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Converts a numeric value to `f64`, widening integers.
    ///
    /// Returns `None` for booleans and strings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Integers print in decimal, decimals always carry a fractional part
    /// (`2.0`), booleans as `true`/`false`, strings raw.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Decimal(d) => {
                let text = d.to_string();
                if d.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            },
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}
