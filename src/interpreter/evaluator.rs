/// Binary operator evaluation logic.
///
/// Handles arithmetic with numeric promotion, string concatenation,
/// comparisons and the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), which walks statements and
/// expressions, and the drivers for both evaluation modes.
pub mod core;

/// Control-flow policies.
///
/// [`Check`](flow::Check) visits every branch once without output;
/// [`Execute`](flow::Execute) follows real control flow and writes output.
pub mod flow;

/// Evaluation of `if` and `for` statements.
pub mod for_loop;

/// Scope chain holding variable bindings and their pinned kinds.
pub mod environment;
