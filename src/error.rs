//! Error model: every failure is one of three kinds (Syntax, Name, Runtime).
//!
//! `ErrorKind` is the load-bearing signal callers branch on; the `thiserror`
//! messages are for humans.

use thiserror::Error;

pub const ARITY_ONE: &str = "exactly 1 argument";
pub const ARITY_TWO: &str = "exactly 2 arguments";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1 argument";
pub const ARITY_AT_LEAST_TWO: &str = "at least 2 arguments";
pub const ARITY_ONE_OR_TWO: &str = "1 or 2 arguments";
pub const ARITY_TWO_OR_THREE: &str = "2 or 3 arguments";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Name,
    Runtime,
}

#[derive(Debug, Error, Clone)]
pub enum LispError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unbound identifier: {0}")]
    UnboundName(String),

    #[error("wrong number of arguments to {name}: expected {expected}, got {got}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("{op}: expected a pair, got {got}")]
    NotAPair { op: &'static str, got: &'static str },

    #[error("{op}: expected a number, got {got}")]
    NotANumber { op: &'static str, got: &'static str },

    #[error("attempt to call non-procedure value of type {got}")]
    NotAProcedure { got: &'static str },

    #[error("index {index} out of range for {op}")]
    IndexOutOfRange { op: &'static str, index: i64 },

    #[error("{0}")]
    Custom { kind: ErrorKind, message: String },
}

impl LispError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LispError::Syntax(_) => ErrorKind::Syntax,
            LispError::UnboundName(_) => ErrorKind::Name,
            LispError::Arity { .. }
            | LispError::NotAPair { .. }
            | LispError::NotANumber { .. }
            | LispError::NotAProcedure { .. }
            | LispError::IndexOutOfRange { .. } => ErrorKind::Runtime,
            LispError::Custom { kind, .. } => *kind,
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        LispError::Syntax(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        LispError::Custom {
            kind: ErrorKind::Runtime,
            message: message.into(),
        }
    }

    pub fn arity(name: &'static str, expected: &'static str, got: usize) -> Self {
        LispError::Arity { name, expected, got }
    }
}
