use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{
        environment::EnvRef,
        evaluator::core::{eval_expression, eval_statement},
        value::Value,
    },
};

/// Evaluates the statements of a block in order.
///
/// Unlike the program root, a block keeps a `Return` *wrapped* so that
/// enclosing blocks continue to short-circuit; only the program root and
/// function application unwrap it. Blocks do not open a new environment.
pub(super) fn eval_block(block: &BlockStatement, env: &EnvRef) -> Value {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

/// Evaluates an `if` expression.
///
/// The condition's truthiness selects the branch: the consequence when
/// truthy, the alternative when present, and `null` otherwise.
pub(super) fn eval_if_expression(condition: &Expression,
                                 consequence: &BlockStatement,
                                 alternative: Option<&BlockStatement>,
                                 env: &EnvRef)
                                 -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}
