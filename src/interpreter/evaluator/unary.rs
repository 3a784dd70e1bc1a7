use crate::{ast::UnaryOperator, error::RuntimeError, interpreter::value::Value};

/// Applies a unary operator to an already-evaluated operand.
///
/// `!` negates by truthiness and is defined for every value, so `!5` is
/// `false` and `!null` is `true`. `-` is only defined for integers.
pub(super) fn eval_unary_op(op: UnaryOperator, right: &Value) -> Value {
    match op {
        UnaryOperator::Not => Value::Boolean(!right.is_truthy()),
        UnaryOperator::Negate => eval_negation(right),
    }
}

fn eval_negation(right: &Value) -> Value {
    match right {
        Value::Integer(value) => match value.checked_neg() {
            Some(negated) => Value::Integer(negated),
            None => Value::Error(RuntimeError::IntegerOverflow),
        },
        _ => Value::Error(RuntimeError::UnknownUnaryOperator { op:    UnaryOperator::Negate,
                                                               right: right.type_name() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_follows_truthiness() {
        assert_eq!(eval_unary_op(UnaryOperator::Not, &Value::Boolean(true)),
                   Value::Boolean(false));
        assert_eq!(eval_unary_op(UnaryOperator::Not, &Value::Integer(0)),
                   Value::Boolean(false));
        assert_eq!(eval_unary_op(UnaryOperator::Not, &Value::Null), Value::Boolean(true));
    }

    #[test]
    fn negation_is_integer_only() {
        assert_eq!(eval_unary_op(UnaryOperator::Negate, &Value::Integer(5)),
                   Value::Integer(-5));
        assert_eq!(eval_unary_op(UnaryOperator::Negate, &Value::Boolean(true)),
                   Value::Error(RuntimeError::UnknownUnaryOperator { op:    UnaryOperator::Negate,
                                                                     right: "BOOLEAN" }));
    }

    #[test]
    fn negating_the_minimum_integer_overflows() {
        assert_eq!(eval_unary_op(UnaryOperator::Negate, &Value::Integer(i64::MIN)),
                   Value::Error(RuntimeError::IntegerOverflow));
    }
}
