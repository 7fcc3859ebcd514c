use thiserror::Error;

use crate::{diagnostics::Located, interpreter::value::core::Kind};

#[derive(Debug, Error)]
/// Represents all errors that can occur during checking and execution.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Undefined variable \"{name}\"")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that the current scope already holds.
    #[error("Variable \"{name}\" already exists")]
    AlreadyDefined {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned a value whose kind does not match the variable's pinned kind.
    #[error("Could not cast {found} value to {expected} for \"{name}\"")]
    KindMismatch {
        /// The name of the variable.
        name:     String,
        /// The kind pinned at the variable's definition.
        expected: Kind,
        /// The kind of the rejected value.
        found:    Kind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to operands it does not accept.
    #[error("{details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `if` or `for` condition did not produce a boolean.
    #[error("Could not cast condition to boolean")]
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer division or remainder by zero.
    #[error("Division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Integer overflow while trying to compute result")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The output stream rejected a write.
    #[error("Could not write program output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Whether the error depends only on concrete operand values rather than
    /// on their kinds.
    ///
    /// The check pass computes with whatever values it happens to see, so
    /// these faults say nothing about the program's types.
    #[must_use]
    pub const fn is_value_fault(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::Overflow { .. })
    }
}

impl Located for RuntimeError {
    fn line(&self) -> Option<usize> {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::AlreadyDefined { line, .. }
            | Self::KindMismatch { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedBoolean { line }
            | Self::DivisionByZero { line }
            | Self::Overflow { line } => Some(*line),
            Self::Output(_) => None,
        }
    }
}
