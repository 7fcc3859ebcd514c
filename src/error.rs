/// Lexical errors.
///
/// Raised by the scanner for characters it cannot place into any token and
/// for malformed literals. Scanning continues after each of them, so a single
/// pass reports every lexical problem of a source.
pub mod scan_error;
/// Syntax and scope errors.
///
/// Shared by the validator and the parser: grammar violations, unbalanced
/// nesting, undefined or redeclared names.
pub mod parse_error;
/// Semantic and type errors.
///
/// Raised by the evaluator in both of its modes: operand kind mismatches,
/// kind-incompatible assignments, undefined names and arithmetic faults.
pub mod runtime_error;
/// Failures while writing or reading a compiled program.
pub mod persist_error;

pub use parse_error::ParseError;
pub use persist_error::PersistError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;
use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Failure of a whole pipeline run started through the crate-level drivers.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage before execution reported errors; they are all in here.
    #[error("{diagnostics}")]
    Rejected {
        /// Everything reported up to and including the failing stage.
        diagnostics: Diagnostics,
    },
    /// Execution stopped on a fatal error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A compiled program could not be written or read.
    #[error(transparent)]
    Persist(#[from] PersistError),
}
