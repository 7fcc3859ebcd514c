use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, logic::eval_logic, scalar::eval_arithmetic},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Routes the operation to a specialized handler by operator: arithmetic
/// (including string concatenation) to `eval_arithmetic`, relational and
/// equality operators to `eval_comparison`, `and` and `or` to `eval_logic`.
/// Both operands are already evaluated, so logical operators never
/// short-circuit.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use bsl::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Decimal(0.5), 1);
/// assert_eq!(sum.unwrap(), Value::Decimal(3.5));
///
/// let text = eval_binary(BinaryOperator::Add, &Value::Str("n=".into()), &Value::Int(4), 1);
/// assert_eq!(text.unwrap(), Value::Str("n=4".into()));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div | Mod => eval_arithmetic(op, left, right, line),
        Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
            eval_comparison(op, left, right, line)
        },
        And | Or => eval_logic(op, left, right, line),
    }
}
