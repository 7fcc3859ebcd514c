use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a logical operation between two boolean values.
///
/// Supported operators are logical AND and OR. Both operands have already
/// been evaluated by the caller.
///
/// # Example
/// ```
/// use bsl::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let result = eval_logic(BinaryOperator::Or, &Value::Bool(false), &Value::Bool(true), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_logic(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    let (Value::Bool(a), Value::Bool(b)) = (left, right) else {
        return Err(RuntimeError::TypeError { details: format!("Could not cast {} and {} to boolean for \"{op}\"",
                                                              left.kind(),
                                                              right.kind()),
                                             line });
    };
    Ok(Value::Bool(match op {
                       BinaryOperator::And => *a && *b,
                       _ => *a || *b,
                   }))
}
