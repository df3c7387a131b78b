//! Pairs and lists: cons, car, cdr, set-car!, set-cdr!, list, list-ref, list-tail.

use crate::env::Environment;
use crate::error::{LispError, ARITY_ONE, ARITY_TWO};
use crate::value::{Procedure, Value};
use std::rc::Rc;

pub fn builtin_cons(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [a, b] => Ok(Value::cons(a.clone(), b.clone())),
        _ => Err(LispError::arity("cons", ARITY_TWO, args.len())),
    }
}

pub fn builtin_car(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [p] => p.car(),
        _ => Err(LispError::arity("car", ARITY_ONE, args.len())),
    }
}

pub fn builtin_cdr(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [p] => p.cdr(),
        _ => Err(LispError::arity("cdr", ARITY_ONE, args.len())),
    }
}

pub fn builtin_set_car(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [p, v] => {
            p.set_car(v.clone())?;
            Ok(Value::Null)
        }
        _ => Err(LispError::arity("set-car!", ARITY_TWO, args.len())),
    }
}

pub fn builtin_set_cdr(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [p, v] => {
            p.set_cdr(v.clone())?;
            Ok(Value::Null)
        }
        _ => Err(LispError::arity("set-cdr!", ARITY_TWO, args.len())),
    }
}

pub fn builtin_list(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::from_vec(args.to_vec()))
}

fn index_arg(v: &Value, op: &'static str) -> Result<i64, LispError> {
    match v {
        Value::Number(n) if *n >= 0 => Ok(*n),
        Value::Number(n) => Err(LispError::IndexOutOfRange { op, index: *n }),
        other => Err(LispError::NotANumber {
            op,
            got: other.type_name(),
        }),
    }
}

pub fn builtin_list_ref(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [list, idx] => {
            if !list.is_list() {
                return Err(LispError::runtime("list-ref: expected a proper list"));
            }
            let k = index_arg(idx, "list-ref")?;
            let mut cur = list.clone();
            for _ in 0..k {
                cur = cur.cdr().map_err(|_| LispError::IndexOutOfRange {
                    op: "list-ref",
                    index: k,
                })?;
            }
            cur.car().map_err(|_| LispError::IndexOutOfRange {
                op: "list-ref",
                index: k,
            })
        }
        _ => Err(LispError::arity("list-ref", ARITY_TWO, args.len())),
    }
}

pub fn builtin_list_tail(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [list, idx] => {
            if !list.is_list() {
                return Err(LispError::runtime("list-tail: expected a proper list"));
            }
            let k = index_arg(idx, "list-tail")?;
            let mut cur = list.clone();
            for _ in 0..k {
                cur = cur.cdr().map_err(|_| LispError::IndexOutOfRange {
                    op: "list-tail",
                    index: k,
                })?;
            }
            Ok(cur)
        }
        _ => Err(LispError::arity("list-tail", ARITY_TWO, args.len())),
    }
}

pub fn register(env: &Rc<Environment>) {
    let entries: &[(&str, crate::value::BuiltinFn)] = &[
        ("cons", builtin_cons),
        ("car", builtin_car),
        ("cdr", builtin_cdr),
        ("set-car!", builtin_set_car),
        ("set-cdr!", builtin_set_cdr),
        ("list", builtin_list),
        ("list-ref", builtin_list_ref),
        ("list-tail", builtin_list_tail),
    ];
    for (name, func) in entries {
        env.define(
            name.to_string(),
            Value::Procedure(Procedure::Builtin { name, func: *func }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cons_car_cdr_roundtrip() {
        let p = builtin_cons(&[Value::Number(1), Value::Number(2)]).unwrap();
        assert_eq!(builtin_car(&[p.clone()]).unwrap().to_string(), "1");
        assert_eq!(builtin_cdr(&[p]).unwrap().to_string(), "2");
    }

    #[test]
    fn car_of_non_pair_is_runtime_error() {
        assert!(builtin_car(&[Value::Number(1)]).is_err());
    }

    #[test]
    fn set_car_mutates_in_place() {
        let p = builtin_cons(&[Value::Number(1), Value::Number(2)]).unwrap();
        builtin_set_car(&[p.clone(), Value::Number(99)]).unwrap();
        assert_eq!(builtin_car(&[p]).unwrap().to_string(), "99");
    }

    #[test]
    fn list_ref_and_tail() {
        let list = Value::from_vec(vec![Value::Number(10), Value::Number(20), Value::Number(30)]);
        assert_eq!(
            builtin_list_ref(&[list.clone(), Value::Number(1)])
                .unwrap()
                .to_string(),
            "20"
        );
        assert_eq!(
            builtin_list_tail(&[list.clone(), Value::Number(1)])
                .unwrap()
                .to_string(),
            "(20 30)"
        );
        assert!(builtin_list_ref(&[list, Value::Number(5)]).is_err());
    }

    #[test]
    fn list_ref_and_tail_reject_improper_lists() {
        // (1 2 . 3) — a dotted, not proper, list.
        let improper = Value::cons(
            Value::Number(1),
            Value::cons(Value::Number(2), Value::Number(3)),
        );
        assert!(builtin_list_tail(&[improper.clone(), Value::Number(2)]).is_err());
        assert!(builtin_list_ref(&[improper, Value::Number(0)]).is_err());
    }
}
