//! Arithmetic: +, -, *, /, abs, max, min.
//!
//! All operate on `i64`. Division truncates toward zero, matching Rust's
//! native integer division.

use crate::env::Environment;
use crate::error::{LispError, ARITY_AT_LEAST_ONE};
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

pub fn builtin_add(args: &[Value]) -> Result<Value, LispError> {
    let mut total: i64 = 0;
    for a in args {
        total += number(a, "+")?;
    }
    Ok(Value::Number(total))
}

pub fn builtin_sub(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("-", ARITY_AT_LEAST_ONE, 0));
    }
    let first = number(&args[0], "-")?;
    if args.len() == 1 {
        return Ok(Value::Number(-first));
    }
    let mut total = first;
    for a in &args[1..] {
        total -= number(a, "-")?;
    }
    Ok(Value::Number(total))
}

pub fn builtin_mul(args: &[Value]) -> Result<Value, LispError> {
    let mut total: i64 = 1;
    for a in args {
        total *= number(a, "*")?;
    }
    Ok(Value::Number(total))
}

pub fn builtin_div(args: &[Value]) -> Result<Value, LispError> {
    if args.len() < 2 {
        return Err(LispError::arity("/", "at least 2 arguments", args.len()));
    }
    let mut total = number(&args[0], "/")?;
    for a in &args[1..] {
        let divisor = number(a, "/")?;
        if divisor == 0 {
            return Err(LispError::runtime("division by zero"));
        }
        total /= divisor;
    }
    Ok(Value::Number(total))
}

pub fn builtin_abs(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [a] => Ok(Value::Number(number(a, "abs")?.abs())),
        _ => Err(LispError::arity("abs", crate::error::ARITY_ONE, args.len())),
    }
}

pub fn builtin_max(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("max", ARITY_AT_LEAST_ONE, 0));
    }
    let mut best = number(&args[0], "max")?;
    for a in &args[1..] {
        best = best.max(number(a, "max")?);
    }
    Ok(Value::Number(best))
}

pub fn builtin_min(args: &[Value]) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::arity("min", ARITY_AT_LEAST_ONE, 0));
    }
    let mut best = number(&args[0], "min")?;
    for a in &args[1..] {
        best = best.min(number(a, "min")?);
    }
    Ok(Value::Number(best))
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "+".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "+",
            func: builtin_add,
        }),
    );
    env.define(
        "-".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "-",
            func: builtin_sub,
        }),
    );
    env.define(
        "*".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "*",
            func: builtin_mul,
        }),
    );
    env.define(
        "/".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "/",
            func: builtin_div,
        }),
    );
    env.define(
        "abs".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "abs",
            func: builtin_abs,
        }),
    );
    env.define(
        "max".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "max",
            func: builtin_max,
        }),
    );
    env.define(
        "min".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "min",
            func: builtin_min,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_mul_identities() {
        assert_eq!(builtin_add(&[]).unwrap().to_string(), "0");
        assert_eq!(builtin_mul(&[]).unwrap().to_string(), "1");
    }

    #[test]
    fn sub_with_one_arg_negates() {
        assert_eq!(
            builtin_sub(&[Value::Number(5)]).unwrap().to_string(),
            "-5"
        );
    }

    #[test]
    fn div_requires_two_args() {
        assert!(builtin_div(&[Value::Number(5)]).is_err());
        assert_eq!(
            builtin_div(&[Value::Number(20), Value::Number(4)])
                .unwrap()
                .to_string(),
            "5"
        );
    }

    #[test]
    fn div_by_zero_is_runtime_error() {
        assert!(builtin_div(&[Value::Number(1), Value::Number(0)]).is_err());
    }

    #[test]
    fn chained_subtraction() {
        assert_eq!(
            builtin_sub(&[Value::Number(10), Value::Number(2), Value::Number(3)])
                .unwrap()
                .to_string(),
            "5"
        );
    }
}
