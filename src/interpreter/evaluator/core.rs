use std::rc::Rc;

use crate::{
    ast::{Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::{binary, block, function, unary},
        value::Value,
    },
};

/// Evaluates a program against a root environment and returns the final
/// value.
///
/// Statements run in source order. An `Error` value aborts the run and
/// becomes the result. A `return` unwinds here too, but at the program root
/// there is no enclosing block left to short-circuit, so the wrapped value
/// is returned unwrapped. Otherwise the last statement's value is the
/// program's value.
pub fn eval(program: &Program, env: &EnvRef) -> Value {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Value::Return(value) => return *value,
            Value::Error(_) => return result,
            _ => {},
        }
    }

    result
}

/// Evaluates a single statement.
///
/// `let` binds into the current environment and yields `null`; `return`
/// wraps its value in the return sentinel; an expression statement yields
/// the expression's value. Errors from the value expression propagate
/// before any binding happens.
pub(super) fn eval_statement(statement: &Statement, env: &EnvRef) -> Value {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_value_slot(value.as_ref(), env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.value.clone(), value);
            Value::Null
        },
        Statement::Return { value, .. } => {
            let value = eval_value_slot(value.as_ref(), env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        },
        Statement::Expression { expression, .. } => eval_expression(expression, env),
    }
}

/// Evaluates the value slot of a `let` or `return` statement.
///
/// A slot the parser left empty during error recovery evaluates to `null`.
fn eval_value_slot(value: Option<&Expression>, env: &EnvRef) -> Value {
    value.map_or(Value::Null, |expression| eval_expression(expression, env))
}

/// Evaluates one expression node, dispatching on its variant.
///
/// Sub-expressions are evaluated eagerly and strictly left to right; the
/// first `Error` produced anywhere is returned immediately without further
/// evaluation.
pub(super) fn eval_expression(expression: &Expression, env: &EnvRef) -> Value {
    match expression {
        Expression::IntegerLiteral { value, .. } => Value::from(*value),
        Expression::BooleanLiteral { value, .. } => Value::from(*value),
        Expression::Identifier(identifier) => eval_identifier(&identifier.value, env),
        Expression::UnaryOp { op, right, .. } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            unary::eval_unary_op(*op, &right)
        },
        Expression::BinaryOp { op, left, right, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            binary::eval_binary_op(*op, &left, &right)
        },
        Expression::IfExpr { condition,
                             consequence,
                             alternative,
                             .. } => {
            block::eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body, .. } => {
            Value::Function { parameters: parameters.clone(),
                              body:       body.clone(),
                              env:        Rc::clone(env) }
        },
        Expression::Call { function, arguments, .. } => {
            function::eval_call_expression(function, arguments, env)
        },
    }
}

/// Resolves an identifier against the environment chain.
fn eval_identifier(name: &str, env: &EnvRef) -> Value {
    match env.borrow().get(name) {
        Some(value) => value,
        None => Value::Error(RuntimeError::IdentifierNotFound { name: name.to_owned() }),
    }
}
