//! The embedding facade: owns the root environment and ties the tokenizer,
//! reader, and evaluator together into a single `evaluate` call.

use crate::builtins::register_builtins;
use crate::env::Environment;
use crate::error::LispError;
use crate::eval::eval;
use crate::reader::read;
use crate::tokenizer::Tokenizer;
use std::rc::Rc;
use tracing::{debug, trace};

pub struct Interpreter {
    root: Rc<Environment>,
}

impl Interpreter {
    pub fn new() -> Self {
        let root = Environment::new();
        register_builtins(&root);
        Interpreter { root }
    }

    /// Tokenizes, reads exactly one expression, evaluates it against the
    /// root environment, and returns its canonical printed form.
    pub fn evaluate(&self, source: &str) -> Result<String, LispError> {
        trace!(source, "tokenizing");
        let mut tokenizer = Tokenizer::from_source(source);

        trace!("reading expression");
        let expr = read(&mut tokenizer)?;

        debug!(expr = %expr, "evaluating");
        let result = eval(&expr, &self.root)?;

        Ok(result.to_string())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        self.root.clear();
    }
}
