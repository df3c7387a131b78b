//! Streaming tokenizer: bytes in, lexemes out.
//!
//! Bytes are fed into a growable buffer; `peek`/`next` scan from the current
//! read position. At most one token is held as lookahead so `peek` is
//! idempotent. `feed` supports incremental input — a trailing lone sign or
//! partial digit run is not finalized as a token until either more bytes
//! arrive or `close` is called to say no more ever will.

use crate::error::LispError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Quote,
    Dot,
    Number(i64),
    Symbol(String),
}

fn is_symbol_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'<' | b'=' | b'>' | b'*' | b'#')
}

fn is_symbol_body(b: u8) -> bool {
    is_symbol_start(b) || b.is_ascii_digit() || matches!(b, b'?' | b'!' | b'-')
}

pub struct Tokenizer {
    buf: Vec<u8>,
    pos: usize,
    closed: bool,
    lookahead: Option<Token>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            buf: Vec::new(),
            pos: 0,
            closed: false,
            lookahead: None,
        }
    }

    /// Convenience constructor for a complete, non-streaming source string.
    pub fn from_source(source: &str) -> Self {
        let mut t = Tokenizer::new();
        t.feed(source.as_bytes());
        t.close();
        t
    }

    /// Appends more input bytes. Invalidates any cached "no token yet" state.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Declares that no more bytes will ever be fed; finalizes trailing
    /// ambiguous lexemes (a lone sign, a digit run at EOF) as tokens.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.buf.len() && self.buf[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Attempts to scan the next token starting at `self.pos`.
    /// Returns `Ok(None)` if the buffered bytes don't yet decide a token
    /// (only possible while not closed).
    fn scan(&mut self) -> Result<Option<Token>, LispError> {
        self.skip_whitespace();
        if self.pos >= self.buf.len() {
            return Ok(None);
        }

        let b = self.buf[self.pos];
        match b {
            b'(' => {
                self.pos += 1;
                Ok(Some(Token::Open))
            }
            b')' => {
                self.pos += 1;
                Ok(Some(Token::Close))
            }
            b'\'' => {
                self.pos += 1;
                Ok(Some(Token::Quote))
            }
            b'.' => {
                self.pos += 1;
                Ok(Some(Token::Dot))
            }
            b'/' => {
                self.pos += 1;
                Ok(Some(Token::Symbol("/".to_string())))
            }
            _ if b.is_ascii_digit() => Ok(Some(self.scan_number(false)?)),
            b'+' | b'-' => {
                if self.pos + 1 >= self.buf.len() {
                    if self.closed {
                        self.pos += 1;
                        Ok(Some(Token::Symbol((b as char).to_string())))
                    } else {
                        Ok(None)
                    }
                } else if self.buf[self.pos + 1].is_ascii_digit() {
                    let negative = b == b'-';
                    self.pos += 1;
                    Ok(Some(self.scan_number(negative)?))
                } else {
                    self.pos += 1;
                    Ok(Some(Token::Symbol((b as char).to_string())))
                }
            }
            _ if is_symbol_start(b) => {
                let start = self.pos;
                self.pos += 1;
                while self.pos < self.buf.len() && is_symbol_body(self.buf[self.pos]) {
                    self.pos += 1;
                }
                let text = String::from_utf8_lossy(&self.buf[start..self.pos]).into_owned();
                Ok(Some(Token::Symbol(text)))
            }
            other => Err(LispError::syntax(format!(
                "unexpected character '{}'",
                other as char
            ))),
        }
    }

    /// Scans a digit run (the sign, if any, has already been consumed past
    /// `self.pos`). `negative` flips the sign. Fails with a Syntax error if
    /// the digit run doesn't fit in an `i64`.
    fn scan_number(&mut self, negative: bool) -> Result<Token, LispError> {
        let digits_start = self.pos;
        while self.pos < self.buf.len() && self.buf[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        let digits = std::str::from_utf8(&self.buf[digits_start..self.pos]).unwrap();
        let magnitude: i64 = digits
            .parse()
            .map_err(|_| LispError::syntax(format!("numeric literal out of range: {digits}")))?;
        Ok(Token::Number(if negative { -magnitude } else { magnitude }))
    }

    /// Returns the current token without consuming it, scanning if needed.
    pub fn peek(&mut self) -> Result<Option<&Token>, LispError> {
        if self.lookahead.is_none() {
            self.lookahead = self.scan()?;
        }
        Ok(self.lookahead.as_ref())
    }

    /// Consumes and returns the current token, advancing past it.
    pub fn next(&mut self) -> Result<Option<Token>, LispError> {
        if self.lookahead.is_some() {
            return Ok(self.lookahead.take());
        }
        self.scan()
    }

    /// True iff no token can currently be produced from the buffered bytes
    /// (either genuinely at end of input, or — while still open — waiting
    /// on more bytes to disambiguate a trailing lexeme).
    pub fn is_end(&mut self) -> Result<bool, LispError> {
        Ok(self.peek()?.is_none())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}
