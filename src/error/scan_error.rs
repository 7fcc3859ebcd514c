use thiserror::Error;

use crate::diagnostics::Located;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors the scanner can report.
pub enum ScanError {
    /// A character (or a bare `!`) that starts no token.
    #[error("Could not recognize symbol \"{symbol}\"")]
    UnrecognizedSymbol {
        /// The offending text.
        symbol: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal that crosses a line break or never closes.
    #[error("Unterminated string")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal outside the 64-bit range.
    #[error("Integer literal {literal} is too large")]
    IntegerTooLarge {
        /// The digits as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A decimal literal too large to represent.
    #[error("Decimal literal {literal} is too large")]
    DecimalTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl Located for ScanError {
    fn line(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedSymbol { line, .. }
            | Self::UnterminatedString { line }
            | Self::IntegerTooLarge { line, .. }
            | Self::DecimalTooLarge { line, .. } => Some(*line),
        }
    }
}
