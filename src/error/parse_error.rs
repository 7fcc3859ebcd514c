use thiserror::Error;

use crate::{diagnostics::Located, interpreter::token::TokenKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during validation or parsing.
pub enum ParseError {
    /// A specific token or construct was required but something else came.
    #[error("Expected {expected}, but found {found}")]
    Expected {
        /// Description of what was required.
        expected: &'static str,
        /// The token encountered instead.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operand was required.
    #[error("Expected expression, but found {found}")]
    ExpectedExpression {
        /// The token encountered instead.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A name is used where no enclosing scope declares it.
    #[error("Undefined variable name \"{name}\"")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name is declared twice in the same scope.
    #[error("Such variable name \"{name}\" reserved")]
    NameReserved {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `else` without an `if` body directly before it.
    #[error("Could not find an if statement for this else branch")]
    DanglingElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Braces or parentheses do not pair up.
    #[error("Expected \"{expected}\", but not found")]
    Unbalanced {
        /// The delimiter that is missing.
        expected: char,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Only a bare variable can be assigned to.
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl Located for ParseError {
    fn line(&self) -> Option<usize> {
        match self {
            Self::Expected { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::NameReserved { line, .. }
            | Self::DanglingElse { line }
            | Self::Unbalanced { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::UnexpectedEndOfInput { line } => Some(*line),
        }
    }
}
