/// Operator dispatch.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Relational and equality comparisons.
pub mod comparison;

/// `and` / `or`.
pub mod logic;
