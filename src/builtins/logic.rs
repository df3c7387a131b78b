//! Boolean operations. `and`/`or` are special forms (they control argument
//! evaluation for short-circuiting); `not` is an ordinary unary builtin.

use crate::env::Environment;
use crate::error::{LispError, ARITY_ONE};
use crate::value::{Procedure, Value};
use std::rc::Rc;

pub fn builtin_not(args: &[Value]) -> Result<Value, LispError> {
    match args {
        [a] => Ok(Value::Bool(!a.is_truthy())),
        _ => Err(LispError::arity("not", ARITY_ONE, args.len())),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "not".to_string(),
        Value::Procedure(Procedure::Builtin {
            name: "not",
            func: builtin_not,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_only_true_for_false() {
        assert_eq!(builtin_not(&[Value::Bool(false)]).unwrap().to_string(), "#t");
        assert_eq!(builtin_not(&[Value::Bool(true)]).unwrap().to_string(), "#f");
        assert_eq!(builtin_not(&[Value::Number(0)]).unwrap().to_string(), "#f");
        assert_eq!(builtin_not(&[Value::Null]).unwrap().to_string(), "#f");
    }
}
