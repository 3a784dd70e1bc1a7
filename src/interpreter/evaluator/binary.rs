use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::Value};

/// Applies a binary operator to two already-evaluated operands.
///
/// Integer pairs support the full operator set; boolean pairs support only
/// equality. Operands of different types are a type mismatch, and
/// same-typed operands with no applicable rule are an unknown operator.
pub(super) fn eval_binary_op(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_op(op, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_op(op, *l, *r),
        _ if left.type_name() != right.type_name() => {
            Value::Error(RuntimeError::TypeMismatch { left: left.type_name(),
                                                      op,
                                                      right: right.type_name() })
        },
        _ => Value::Error(RuntimeError::UnknownBinaryOperator { left: left.type_name(),
                                                                op,
                                                                right: right.type_name() }),
    }
}

/// Integer arithmetic and comparison.
///
/// Division truncates toward zero. A zero divisor and 64-bit overflow both
/// surface as runtime errors rather than panics.
fn eval_integer_op(op: BinaryOperator, left: i64, right: i64) -> Value {
    match op {
        BinaryOperator::Add => checked(left.checked_add(right)),
        BinaryOperator::Sub => checked(left.checked_sub(right)),
        BinaryOperator::Mul => checked(left.checked_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Value::Error(RuntimeError::DivisionByZero);
            }
            checked(left.checked_div(right))
        },
        BinaryOperator::Less => Value::Boolean(left < right),
        BinaryOperator::Greater => Value::Boolean(left > right),
        BinaryOperator::Equal => Value::Boolean(left == right),
        BinaryOperator::NotEqual => Value::Boolean(left != right),
    }
}

fn checked(result: Option<i64>) -> Value {
    match result {
        Some(value) => Value::Integer(value),
        None => Value::Error(RuntimeError::IntegerOverflow),
    }
}

/// Booleans compare by value and support nothing else.
fn eval_boolean_op(op: BinaryOperator, left: bool, right: bool) -> Value {
    match op {
        BinaryOperator::Equal => Value::Boolean(left == right),
        BinaryOperator::NotEqual => Value::Boolean(left != right),
        _ => Value::Error(RuntimeError::UnknownBinaryOperator { left: "BOOLEAN",
                                                                op,
                                                                right: "BOOLEAN" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval_integer_op(BinaryOperator::Div, 7, 2), Value::Integer(3));
        assert_eq!(eval_integer_op(BinaryOperator::Div, -7, 2), Value::Integer(-3));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval_integer_op(BinaryOperator::Div, 1, 0),
                   Value::Error(RuntimeError::DivisionByZero));
    }

    #[test]
    fn arithmetic_overflow_is_an_error() {
        assert_eq!(eval_integer_op(BinaryOperator::Add, i64::MAX, 1),
                   Value::Error(RuntimeError::IntegerOverflow));
        assert_eq!(eval_integer_op(BinaryOperator::Mul, i64::MAX, 2),
                   Value::Error(RuntimeError::IntegerOverflow));
        assert_eq!(eval_integer_op(BinaryOperator::Div, i64::MIN, -1),
                   Value::Error(RuntimeError::IntegerOverflow));
    }

    #[test]
    fn mixed_types_are_a_mismatch() {
        assert_eq!(eval_binary_op(BinaryOperator::Add, &Value::Integer(5), &Value::Boolean(true)),
                   Value::Error(RuntimeError::TypeMismatch { left:  "INTEGER",
                                                             op:    BinaryOperator::Add,
                                                             right: "BOOLEAN" }));
    }

    #[test]
    fn booleans_only_support_equality() {
        assert_eq!(eval_binary_op(BinaryOperator::Equal,
                                  &Value::Boolean(true),
                                  &Value::Boolean(true)),
                   Value::Boolean(true));
        assert_eq!(eval_binary_op(BinaryOperator::Less,
                                  &Value::Boolean(true),
                                  &Value::Boolean(false)),
                   Value::Error(RuntimeError::UnknownBinaryOperator { left:  "BOOLEAN",
                                                                      op:    BinaryOperator::Less,
                                                                      right: "BOOLEAN" }));
    }
}
