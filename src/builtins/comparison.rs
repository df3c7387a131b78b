//! Chained comparisons: =, <, >, <=, >=.
//!
//! `(< 1 2 3)` holds iff every adjacent pair satisfies the predicate; zero or
//! one argument is vacuously true.

use crate::env::Environment;
use crate::error::LispError;
use crate::value::{Procedure, Value};
use std::rc::Rc;

fn number(v: &Value, op: &'static str) -> Result<i64, LispError> {
    match v {
        Value::Number(n) => Ok(*n),
        other => Err(LispError::NotANumber {
            op,
            got: other.type_name(),
        }),
    }
}

fn chained(args: &[Value], op: &'static str, pred: impl Fn(i64, i64) -> bool) -> Result<Value, LispError> {
    let nums = args
        .iter()
        .map(|v| number(v, op))
        .collect::<Result<Vec<_>, _>>()?;
    let ok = nums.windows(2).all(|pair| pred(pair[0], pair[1]));
    Ok(Value::Bool(ok))
}

pub fn builtin_eq(args: &[Value]) -> Result<Value, LispError> {
    chained(args, "=", |a, b| a == b)
}

pub fn builtin_lt(args: &[Value]) -> Result<Value, LispError> {
    chained(args, "<", |a, b| a < b)
}

pub fn builtin_gt(args: &[Value]) -> Result<Value, LispError> {
    chained(args, ">", |a, b| a > b)
}

pub fn builtin_le(args: &[Value]) -> Result<Value, LispError> {
    chained(args, "<=", |a, b| a <= b)
}

pub fn builtin_ge(args: &[Value]) -> Result<Value, LispError> {
    chained(args, ">=", |a, b| a >= b)
}

pub fn register(env: &Rc<Environment>) {
    let entries: &[(&str, &'static str, crate::value::BuiltinFn)] = &[
        ("=", "=", builtin_eq),
        ("<", "<", builtin_lt),
        (">", ">", builtin_gt),
        ("<=", "<=", builtin_le),
        (">=", ">=", builtin_ge),
    ];
    for (binding, name, func) in entries {
        env.define(
            binding.to_string(),
            Value::Procedure(Procedure::Builtin { name, func: *func }),
        );
    }
}
