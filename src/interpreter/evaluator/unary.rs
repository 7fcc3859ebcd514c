use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation for integers and decimals; negating
///   `i64::MIN` overflows.
/// - `Not`: boolean negation.
///
/// # Example
/// ```
/// use bsl::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap();
/// assert_eq!(v, Value::Int(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Int(1), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Int(n)) => n.checked_neg()
                                                   .map(Value::Int)
                                                   .ok_or(RuntimeError::Overflow { line }),
        (UnaryOperator::Negate, Value::Decimal(d)) => Ok(Value::Decimal(-d)),
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOperator::Negate, other) => {
            Err(RuntimeError::TypeError { details: format!("Could not cast {} to number", other.kind()),
                                          line })
        },
        (UnaryOperator::Not, other) => {
            Err(RuntimeError::TypeError { details: format!("Could not cast {} to boolean", other.kind()),
                                          line })
        },
    }
}
