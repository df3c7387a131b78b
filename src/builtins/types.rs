//! Type predicates: boolean?, number?, symbol?, pair?, null?, list?

use crate::env::Environment;
use crate::error::{LispError, ARITY_ONE};
use crate::value::{Procedure, Value};
use std::rc::Rc;

fn unary(name: &'static str, args: &[Value]) -> Result<&Value, LispError> {
    match args {
        [a] => Ok(a),
        _ => Err(LispError::arity(name, ARITY_ONE, args.len())),
    }
}

pub fn builtin_boolean_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("boolean?", args)?.is_boolean()))
}

pub fn builtin_number_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("number?", args)?.is_number()))
}

pub fn builtin_symbol_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("symbol?", args)?.is_symbol()))
}

pub fn builtin_pair_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("pair?", args)?.is_pair()))
}

pub fn builtin_null_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("null?", args)?.is_null()))
}

pub fn builtin_list_p(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::Bool(unary("list?", args)?.is_list()))
}

pub fn register(env: &Rc<Environment>) {
    let entries: &[(&str, crate::value::BuiltinFn)] = &[
        ("boolean?", builtin_boolean_p),
        ("number?", builtin_number_p),
        ("symbol?", builtin_symbol_p),
        ("pair?", builtin_pair_p),
        ("null?", builtin_null_p),
        ("list?", builtin_list_p),
    ];
    for (name, func) in entries {
        env.define(
            name.to_string(),
            Value::Procedure(Procedure::Builtin { name, func: *func }),
        );
    }
}
