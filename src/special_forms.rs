//! Special forms receive their argument tail unevaluated and decide for
//! themselves what, when, and whether to evaluate.

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::eval;
use crate::value::{Lambda, Procedure, Value};
use std::collections::HashMap;
use std::rc::Rc;

pub type SpecialFormFn = fn(&Value, &Rc<Environment>) -> Result<Value, LispError>;

pub fn lookup(name: &str) -> Option<SpecialFormFn> {
    SPECIAL_FORMS.with(|table| table.get(name).copied())
}

thread_local! {
    static SPECIAL_FORMS: HashMap<&'static str, SpecialFormFn> = {
        let mut m: HashMap<&'static str, SpecialFormFn> = HashMap::new();
        m.insert("quote", sf_quote);
        m.insert("if", sf_if);
        m.insert("lambda", sf_lambda);
        m.insert("define", sf_define);
        m.insert("set!", sf_set);
        m.insert("and", sf_and);
        m.insert("or", sf_or);
        m
    };
}

fn sf_quote(tail: &Value, _env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    match args.as_slice() {
        [single] => Ok(single.clone()),
        _ => Err(LispError::syntax("quote expects exactly 1 argument")),
    }
}

fn sf_if(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    match args.as_slice() {
        [cond, then] => {
            if eval(cond, env)?.is_truthy() {
                eval(then, env)
            } else {
                Ok(Value::Null)
            }
        }
        [cond, then, else_] => {
            if eval(cond, env)?.is_truthy() {
                eval(then, env)
            } else {
                eval(else_, env)
            }
        }
        _ => Err(LispError::syntax("if expects 2 or 3 arguments")),
    }
}

fn sf_lambda(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    let (params_expr, body) = match args.split_first() {
        Some((p, b)) if !b.is_empty() => (p, b.to_vec()),
        _ => return Err(LispError::syntax("lambda expects a parameter list and a body")),
    };

    let param_values = params_expr
        .to_vec_syntax()
        .map_err(|_| LispError::syntax("lambda parameter list must be a proper list"))?;
    let mut params = Vec::with_capacity(param_values.len());
    for p in param_values {
        match p.as_symbol() {
            Some(name) => params.push(name.clone()),
            None => return Err(LispError::syntax("lambda parameters must be symbols")),
        }
    }

    Ok(Value::Procedure(Procedure::Lambda(Rc::new(Lambda {
        params,
        body,
        env: env.clone(),
    }))))
}

fn sf_define(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    match args.split_first() {
        // (define name expr)
        Some((target, rest)) if target.is_symbol() => {
            let value = match rest {
                [expr] => eval(expr, env)?,
                [] => return Err(LispError::syntax("define expects a value expression")),
                _ => return Err(LispError::syntax("define expects exactly one value expression")),
            };
            let name = target.as_symbol().unwrap();
            env.define(name.to_string(), value);
            Ok(Value::symbol(name))
        }
        // (define (name params...) body...)
        Some((target, body)) if target.is_pair() => {
            if body.is_empty() {
                return Err(LispError::syntax("define expects a function body"));
            }
            let name = target
                .car()?
                .as_symbol()
                .cloned()
                .ok_or_else(|| LispError::syntax("define function name must be a symbol"))?;
            let params_expr = target.cdr()?;
            let param_values = params_expr
                .to_vec_syntax()
                .map_err(|_| LispError::syntax("define parameter list must be a proper list"))?;
            let mut params = Vec::with_capacity(param_values.len());
            for p in param_values {
                match p.as_symbol() {
                    Some(n) => params.push(n.clone()),
                    None => return Err(LispError::syntax("define parameters must be symbols")),
                }
            }
            let lambda = Value::Procedure(Procedure::Lambda(Rc::new(Lambda {
                params,
                body: body.to_vec(),
                env: env.clone(),
            })));
            env.define(name.to_string(), lambda);
            Ok(Value::Symbol(name))
        }
        _ => Err(LispError::syntax(
            "define expects (define name expr) or (define (name params...) body...)",
        )),
    }
}

fn sf_set(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    match args.as_slice() {
        [name, expr] => {
            let name = name
                .as_symbol()
                .ok_or_else(|| LispError::syntax("set! expects a symbol as its first argument"))?;
            let value = eval(expr, env)?;
            env.set(name, value.clone())?;
            Ok(value)
        }
        _ => Err(LispError::syntax("set! expects exactly 2 arguments")),
    }
}

fn sf_and(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    let mut result = Value::Bool(true);
    for expr in &args {
        result = eval(expr, env)?;
        if !result.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(result)
}

fn sf_or(tail: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    let args = tail.to_vec_syntax()?;
    let mut last = Value::Bool(false);
    for expr in &args {
        last = eval(expr, env)?;
        if last.is_truthy() {
            return Ok(last);
        }
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;

    #[test]
    fn if_evaluates_correct_branch() {
        let interp = Interpreter::new();
        assert_eq!(interp.evaluate("(if #t 1 2)").unwrap(), "1");
        assert_eq!(interp.evaluate("(if #f 1 2)").unwrap(), "2");
        assert_eq!(interp.evaluate("(if #f 1)").unwrap(), "()");
    }

    #[test]
    fn and_or_short_circuit_and_return_actual_value() {
        let interp = Interpreter::new();
        assert_eq!(interp.evaluate("(and)").unwrap(), "#t");
        assert_eq!(interp.evaluate("(or)").unwrap(), "#f");
        assert_eq!(interp.evaluate("(and 1 2 3)").unwrap(), "3");
        assert_eq!(interp.evaluate("(or #f 5)").unwrap(), "5");
        assert_eq!(interp.evaluate("(and #f (car 1))").unwrap(), "#f");
    }

    #[test]
    fn lambda_captures_lexical_environment() {
        let interp = Interpreter::new();
        interp.evaluate("(define x 1)").unwrap();
        interp.evaluate("(define f (lambda () x))").unwrap();
        interp.evaluate("(define x 2)").unwrap();
        assert_eq!(interp.evaluate("(f)").unwrap(), "2");
    }
}
