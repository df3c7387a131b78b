//! Recursive-descent reader: token stream -> Value AST.

use crate::error::LispError;
use crate::tokenizer::{Token, Tokenizer};
use crate::value::Value;

/// Reads exactly one expression and requires no trailing tokens afterwards.
pub fn read(tokenizer: &mut Tokenizer) -> Result<Value, LispError> {
    let expr = read_expr(tokenizer)?;
    if !tokenizer.is_end()? {
        return Err(LispError::syntax(
            "unexpected trailing input after top-level expression",
        ));
    }
    Ok(expr)
}

fn read_expr(tokenizer: &mut Tokenizer) -> Result<Value, LispError> {
    let token = tokenizer
        .next()?
        .ok_or_else(|| LispError::syntax("unexpected end of input"))?;

    match token {
        Token::Number(n) => Ok(Value::Number(n)),
        Token::Symbol(s) => Ok(match s.as_str() {
            "#t" => Value::Bool(true),
            "#f" => Value::Bool(false),
            _ => Value::symbol(&s),
        }),
        Token::Quote => {
            let quoted = read_expr(tokenizer)?;
            Ok(Value::cons(
                Value::symbol("quote"),
                Value::cons(quoted, Value::Null),
            ))
        }
        Token::Open => read_list(tokenizer),
        Token::Close => Err(LispError::syntax("unexpected ')'")),
        Token::Dot => Err(LispError::syntax("unexpected '.'")),
    }
}

fn read_list(tokenizer: &mut Tokenizer) -> Result<Value, LispError> {
    let mut items = Vec::new();
    let mut tail = Value::Null;

    loop {
        match tokenizer.peek()? {
            None => return Err(LispError::syntax("unterminated list")),
            Some(Token::Close) => {
                tokenizer.next()?;
                break;
            }
            Some(Token::Dot) => {
                if items.is_empty() {
                    return Err(LispError::syntax("'.' with no preceding element"));
                }
                tokenizer.next()?;
                tail = read_expr(tokenizer)?;
                match tokenizer.next()? {
                    Some(Token::Close) => break,
                    _ => {
                        return Err(LispError::syntax(
                            "expected ')' after dotted tail",
                        ))
                    }
                }
            }
            Some(_) => {
                items.push(read_expr(tokenizer)?);
            }
        }
    }

    let mut result = tail;
    for item in items.into_iter().rev() {
        result = Value::cons(item, result);
    }
    Ok(result)
}
