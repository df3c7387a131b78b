//! The tree-walking evaluator.
//!
//! No tail-call optimization: evaluation recurses through the host call
//! stack exactly as written. Special forms are resolved before procedure
//! application, and only when the combination's head is a literal symbol.

use crate::env::Environment;
use crate::error::LispError;
use crate::special_forms;
use crate::value::{Procedure, Value};
use std::rc::Rc;

pub fn eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    match expr {
        Value::Null => Err(LispError::runtime("cannot evaluate the empty list")),
        Value::Number(_) | Value::Bool(_) => Ok(expr.clone()),
        Value::Symbol(name) => env.get(name),
        Value::Procedure(_) => Err(LispError::runtime("cannot evaluate a procedure value")),
        Value::Pair(_) => eval_combination(expr, env),
    }
}

fn eval_combination(expr: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let head = expr.car()?;
    let tail = expr.cdr()?;

    if let Some(name) = head.as_symbol() {
        if let Some(handler) = special_forms::lookup(name) {
            return handler(&tail, env);
        }
    }

    let proc = eval(&head, env)?;
    let arg_exprs = tail.to_vec_runtime()?;
    let mut args = Vec::with_capacity(arg_exprs.len());
    for arg_expr in &arg_exprs {
        args.push(eval(arg_expr, env)?);
    }
    apply(&proc, &args)
}

pub fn apply(proc: &Value, args: &[Value]) -> Result<Value, LispError> {
    match proc {
        Value::Procedure(Procedure::Builtin { func, .. }) => func(args),
        Value::Procedure(Procedure::Lambda(lambda)) => {
            if lambda.params.len() != args.len() {
                return Err(LispError::runtime(format!(
                    "lambda expects {} argument(s), got {}",
                    lambda.params.len(),
                    args.len()
                )));
            }
            let call_env = Environment::with_parent(lambda.env.clone());
            for (param, arg) in lambda.params.iter().zip(args) {
                call_env.define(param.to_string(), arg.clone());
            }
            let mut result = Value::Null;
            for expr in &lambda.body {
                result = eval(expr, &call_env)?;
            }
            Ok(result)
        }
        other => Err(LispError::NotAProcedure {
            got: other.type_name(),
        }),
    }
}
