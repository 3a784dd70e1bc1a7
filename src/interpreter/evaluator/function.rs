use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::{block::eval_block, core::eval_expression},
        value::Value,
    },
};

/// Evaluates a call expression: the callee first, then the arguments left
/// to right, then the application itself.
///
/// The first error encountered anywhere in that sequence is the result;
/// later arguments are not evaluated.
pub(super) fn eval_call_expression(function: &Expression,
                                   arguments: &[Expression],
                                   env: &EnvRef)
                                   -> Value {
    let function = eval_expression(function, env);
    if function.is_error() {
        return function;
    }

    match eval_arguments(arguments, env) {
        Ok(arguments) => apply_function(&function, arguments),
        Err(error) => error,
    }
}

/// Evaluates argument expressions left to right, stopping at the first
/// error.
fn eval_arguments(arguments: &[Expression], env: &EnvRef) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(arguments.len());

    for argument in arguments {
        let value = eval_expression(argument, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}

/// Applies a function value to already-evaluated arguments.
///
/// A fresh environment encloses the function's *captured* definition-time
/// environment, not the caller's, and binds parameters positionally; this
/// is what makes scoping lexical. A `Return` unwinding out of the body is
/// unwrapped here so the sentinel never escapes a call.
fn apply_function(function: &Value, arguments: Vec<Value>) -> Value {
    let Value::Function { parameters, body, env } = function else {
        return Value::Error(RuntimeError::NotAFunction { type_name: function.type_name() });
    };

    if parameters.len() != arguments.len() {
        return Value::Error(RuntimeError::WrongArgumentCount { expected: parameters.len(),
                                                               got:      arguments.len() });
    }

    let scope = extend_function_env(parameters, arguments, env);
    let result = eval_block(body, &scope);

    match result {
        Value::Return(value) => *value,
        other => other,
    }
}

fn extend_function_env(parameters: &[Identifier], arguments: Vec<Value>, env: &EnvRef) -> EnvRef {
    let mut scope = Environment::new_enclosed(Rc::clone(env));

    for (parameter, argument) in parameters.iter().zip(arguments) {
        scope.set(parameter.value.clone(), argument);
    }

    Rc::new(RefCell::new(scope))
}
