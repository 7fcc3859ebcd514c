use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `+ - * / %`.
///
/// - Two integers use checked 64-bit arithmetic; `/` truncates toward zero.
/// - An integer and a decimal are computed as decimals.
/// - `%` needs two integers.
/// - `+` with a string on the left appends the text of the right operand.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` for integer `/` or `%` by zero.
/// - `RuntimeError::Overflow` if an integer result does not fit.
/// - `RuntimeError::TypeError` for any other operand combination.
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use Value::{Decimal, Int, Str};

    match (op, left, right) {
        (BinaryOperator::Add, Str(a), b) => Ok(Str(format!("{a}{b}"))),
        (BinaryOperator::Mod, Int(a), Int(b)) => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_rem(*b)
             .map(Int)
             .ok_or(RuntimeError::Overflow { line })
        },
        (BinaryOperator::Mod, ..) => {
            Err(RuntimeError::TypeError { details: format!("Could not cast {} and {} to int for \"%\"",
                                                           left.kind(),
                                                           right.kind()),
                                          line })
        },
        (_, Int(a), Int(b)) => integer_op(op, *a, *b, line).map(Int),
        (_, Int(_) | Decimal(_), Int(_) | Decimal(_)) => {
            let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
                return Err(mismatch(op, left, right, line));
            };
            Ok(Decimal(decimal_op(op, a, b)))
        },
        _ => Err(mismatch(op, left, right, line)),
    }
}

fn integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_div(b)
        },
        _ => None,
    };
    result.ok_or(RuntimeError::Overflow { line })
}

fn decimal_op(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        _ => a / b,
    }
}

fn mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Could not cast {} and {} to number for \"{op}\"",
                                               left.kind(),
                                               right.kind()),
                              line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_truncates_toward_zero() {
        let v = eval_arithmetic(BinaryOperator::Div, &Value::Int(-7), &Value::Int(2), 1).unwrap();
        assert_eq!(v, Value::Int(-3));
    }

    #[test]
    fn mixed_operands_promote_to_decimal() {
        let v = eval_arithmetic(BinaryOperator::Div, &Value::Int(1), &Value::Decimal(2.0), 1).unwrap();
        assert_eq!(v, Value::Decimal(0.5));
    }

    #[test]
    fn faults_are_value_faults() {
        let zero = eval_arithmetic(BinaryOperator::Mod, &Value::Int(1), &Value::Int(0), 1).unwrap_err();
        let overflow =
            eval_arithmetic(BinaryOperator::Mul, &Value::Int(i64::MAX), &Value::Int(2), 1).unwrap_err();
        assert!(zero.is_value_fault());
        assert!(overflow.is_value_fault());
    }

    #[test]
    fn modulo_rejects_decimals() {
        let error =
            eval_arithmetic(BinaryOperator::Mod, &Value::Decimal(5.0), &Value::Int(2), 1).unwrap_err();
        assert!(matches!(error, RuntimeError::TypeError { .. }));
    }

    #[test]
    fn string_only_concatenates_on_the_left() {
        let v = eval_arithmetic(BinaryOperator::Add, &Value::Str("x".into()), &Value::Bool(true), 1).unwrap();
        assert_eq!(v, Value::Str("xtrue".into()));
        assert!(eval_arithmetic(BinaryOperator::Add, &Value::Int(1), &Value::Str("x".into()), 1).is_err());
        assert!(eval_arithmetic(BinaryOperator::Sub, &Value::Str("x".into()), &Value::Int(1), 1).is_err());
    }
}
