use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Both sides must belong to the same family: numbers (integers and decimals
/// mix freely), strings (compared lexicographically) or booleans
/// (`false < true`).
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use bsl::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let less = eval_comparison(BinaryOperator::Less, &Value::Int(3), &Value::Decimal(3.5), 1);
/// assert_eq!(less.unwrap(), Value::Bool(true));
///
/// let same = eval_comparison(BinaryOperator::Equal, &Value::Str("a".into()), &Value::Str("a".into()), 1);
/// assert_eq!(same.unwrap(), Value::Bool(true));
///
/// assert!(eval_comparison(BinaryOperator::Equal, &Value::Int(1), &Value::Bool(true), 1).is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ if left.kind().is_numeric() && right.kind().is_numeric() => {
            match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            }
        },
        _ => {
            return Err(RuntimeError::TypeError { details: format!("Could not compare {} with {} using \"{op}\"",
                                                                  left.kind(),
                                                                  right.kind()),
                                                 line });
        },
    };

    // An unordered pair (NaN) is only ever "not equal".
    let Some(ordering) = ordering else {
        return Ok(Value::Bool(op == BinaryOperator::NotEqual));
    };

    Ok(Value::Bool(match op {
                       BinaryOperator::Less => ordering == Ordering::Less,
                       BinaryOperator::LessEqual => ordering != Ordering::Greater,
                       BinaryOperator::Greater => ordering == Ordering::Greater,
                       BinaryOperator::GreaterEqual => ordering != Ordering::Less,
                       BinaryOperator::Equal => ordering == Ordering::Equal,
                       _ => ordering != Ordering::Equal,
                   }))
}
