//! The Value type: atoms, pairs, and procedures.
//!
//! Numbers are `i64`. Lists are mutable cons cells (`Pair`), not `Vec`s, so
//! that `set-car!`/`set-cdr!` and shared structure behave the way Scheme
//! expects. Cloning a `Value::Pair` clones an `Rc`, not the cell.

use crate::env::Environment;
use crate::error::{ErrorKind, LispError};
use std::fmt;
use std::rc::Rc;

pub type BuiltinFn = fn(&[Value]) -> Result<Value, LispError>;

#[derive(Debug)]
pub struct PairData {
    pub car: Value,
    pub cdr: Value,
}

#[derive(Debug, Clone)]
pub struct Lambda {
    pub params: Vec<Rc<str>>,
    pub body: Vec<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Procedure {
    Builtin { name: &'static str, func: BuiltinFn },
    Lambda(Rc<Lambda>),
}

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(i64),
    Symbol(Rc<str>),
    Pair(Rc<std::cell::RefCell<PairData>>),
    Procedure(Procedure),
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(Rc::from(name))
    }

    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Rc::new(std::cell::RefCell::new(PairData { car, cdr })))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::Procedure(_))
    }

    /// Everything is truthy except the boolean `#f`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    pub fn as_symbol(&self) -> Option<&Rc<str>> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn car(&self) -> Result<Value, LispError> {
        match self {
            Value::Pair(p) => Ok(p.borrow().car.clone()),
            _ => Err(LispError::NotAPair {
                op: "car",
                got: self.type_name(),
            }),
        }
    }

    pub fn cdr(&self) -> Result<Value, LispError> {
        match self {
            Value::Pair(p) => Ok(p.borrow().cdr.clone()),
            _ => Err(LispError::NotAPair {
                op: "cdr",
                got: self.type_name(),
            }),
        }
    }

    pub fn set_car(&self, v: Value) -> Result<(), LispError> {
        match self {
            Value::Pair(p) => {
                p.borrow_mut().car = v;
                Ok(())
            }
            _ => Err(LispError::NotAPair {
                op: "set-car!",
                got: self.type_name(),
            }),
        }
    }

    pub fn set_cdr(&self, v: Value) -> Result<(), LispError> {
        match self {
            Value::Pair(p) => {
                p.borrow_mut().cdr = v;
                Ok(())
            }
            _ => Err(LispError::NotAPair {
                op: "set-cdr!",
                got: self.type_name(),
            }),
        }
    }

    /// `#t` iff this value is `Null` or a chain of pairs terminated by `Null`.
    pub fn is_list(&self) -> bool {
        let mut cur = self.clone();
        loop {
            match cur {
                Value::Null => return true,
                Value::Pair(p) => cur = p.borrow().cdr.clone(),
                _ => return false,
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::Pair(_) => "pair",
            Value::Procedure(_) => "procedure",
        }
    }

    /// Collects a proper list into a `Vec`, failing with `Syntax` if improper.
    /// Used for special-form argument tails, where shape errors are syntax errors.
    pub fn to_vec_syntax(&self) -> Result<Vec<Value>, LispError> {
        self.to_vec_with(|| LispError::Custom {
            kind: ErrorKind::Syntax,
            message: "expected a proper list".to_string(),
        })
    }

    /// Collects a proper list into a `Vec`, failing with `Runtime` if improper.
    /// Used for procedure-call argument tails.
    pub fn to_vec_runtime(&self) -> Result<Vec<Value>, LispError> {
        self.to_vec_with(|| LispError::Custom {
            kind: ErrorKind::Runtime,
            message: "expected a proper list".to_string(),
        })
    }

    fn to_vec_with(&self, err: impl Fn() -> LispError) -> Result<Vec<Value>, LispError> {
        let mut out = Vec::new();
        let mut cur = self.clone();
        loop {
            match cur {
                Value::Null => return Ok(out),
                Value::Pair(p) => {
                    let data = p.borrow();
                    out.push(data.car.clone());
                    cur = data.cdr.clone();
                }
                _ => return Err(err()),
            }
        }
    }

    pub fn from_vec(items: Vec<Value>) -> Value {
        let mut result = Value::Null;
        for item in items.into_iter().rev() {
            result = Value::cons(item, result);
        }
        result
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "()"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Procedure(Procedure::Builtin { name, .. }) => write!(f, "#<builtin:{name}>"),
            Value::Procedure(Procedure::Lambda(_)) => write!(f, "#<lambda>"),
            Value::Pair(p) => {
                write!(f, "(")?;
                let data = p.borrow();
                write!(f, "{}", data.car)?;
                let mut cur = data.cdr.clone();
                drop(data);
                loop {
                    match cur {
                        Value::Null => break,
                        Value::Pair(next) => {
                            let next_data = next.borrow();
                            write!(f, " {}", next_data.car)?;
                            let tail = next_data.cdr.clone();
                            drop(next_data);
                            cur = tail;
                        }
                        other => {
                            write!(f, " . {other}")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}
