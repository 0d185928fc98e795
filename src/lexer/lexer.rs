use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    config::{NumberTerminator, ScannerConfig, UnknownBytePolicy},
    errors::errors::{Error, ErrorImpl},
    Position, MK_OPERATOR, MK_SINGLE,
};

use super::tokens::Token;

pub fn is_alpha(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

pub fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

pub fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

/// Single-pass scanner over an immutable byte buffer.
///
/// The cursor only moves forward and never passes one-past-the-end. A
/// scanner is consumed by [`Scanner::scan`].
pub struct Scanner<'a> {
    source: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
    config: ScannerConfig,
    file: Rc<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8], file: Option<String>, config: ScannerConfig) -> Scanner<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source,
            pos: 0,
            tokens: vec![],
            config,
            file: file_name,
        }
    }

    #[cfg(test)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte under the cursor, `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    pub fn peek_next(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn consume(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    pub fn matches(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn position(&self, at: usize) -> Position {
        Position(u32::try_from(at).unwrap_or(u32::MAX), Rc::clone(&self.file))
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    pub fn scan(mut self) -> Result<Vec<Token>, Error> {
        while let Some(c) = self.peek() {
            match c {
                c if is_whitespace(c) => self.consume(),
                b'(' => MK_SINGLE!(self, Token::LeftParen),
                b')' => MK_SINGLE!(self, Token::RightParen),
                b'{' => MK_SINGLE!(self, Token::LeftBrace),
                b'}' => MK_SINGLE!(self, Token::RightBrace),
                b',' => MK_SINGLE!(self, Token::Comma),
                b'.' => MK_SINGLE!(self, Token::Dot),
                b'-' => MK_SINGLE!(self, Token::Minus),
                b'+' => MK_SINGLE!(self, Token::Plus),
                b';' => MK_SINGLE!(self, Token::Semicolon),
                b'*' => MK_SINGLE!(self, Token::Star),
                b'!' => MK_OPERATOR!(self, Token::Bang, Token::BangEqual),
                b'=' => MK_OPERATOR!(self, Token::Equal, Token::EqualEqual),
                b'<' => MK_OPERATOR!(self, Token::Less, Token::LessEqual),
                b'>' => MK_OPERATOR!(self, Token::Greater, Token::GreaterEqual),
                b'/' => {
                    if self.peek_next() == Some(b'/') {
                        self.skip_comment();
                    } else {
                        MK_SINGLE!(self, Token::Slash)
                    }
                }
                b'"' => {
                    let token = self.scan_string()?;
                    self.push(token);
                }
                c if is_digit(c) => {
                    let token = self.scan_number()?;
                    self.push(token);
                }
                c if is_alpha(c) => {
                    let token = self.scan_identifier();
                    self.push(token);
                }
                c => self.unknown_byte(c)?,
            }
        }

        self.push(Token::Eof);
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    // Stops before the newline, which the whitespace branch then skips.
    fn skip_comment(&mut self) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == b'\n' {
                break;
            }
            self.consume();
        }
        trace!(start, end = self.pos, "skipped comment");
    }

    fn scan_string(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.consume();
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some(b'"') => {
                    let literal = self.text(content_start, self.pos);
                    self.consume();
                    return Ok(Token::String(literal));
                }
                Some(_) => self.consume(),
                None => {
                    debug!(start, "unterminated string");
                    return Err(Error::new(
                        ErrorImpl::UnterminatedString {
                            partial: self.text(content_start, self.pos),
                        },
                        self.position(start),
                    ));
                }
            }
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.consume();
        }
    }

    fn scan_number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.consume_digits();

        if self.matches(b'.') {
            self.consume();
            self.consume_digits();

            if let Some(next) = self.peek() {
                if !self.ends_number(next) {
                    debug!(start, at = self.pos, "malformed number");
                    return Err(Error::new(
                        ErrorImpl::MalformedNumber {
                            literal: self.text(start, self.pos),
                            found: next as char,
                        },
                        self.position(self.pos),
                    ));
                }
            }
        }

        Ok(Token::Number(self.text(start, self.pos)))
    }

    fn ends_number(&self, next: u8) -> bool {
        match self.config.number_terminator {
            NumberTerminator::Layout => next == b' ' || next == b'\n',
            NumberTerminator::Lenient => !is_alphanumeric(next) && next != b'.',
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.peek().is_some_and(is_alphanumeric) {
            self.consume();
        }

        let value = self.text(start, self.pos);
        Token::keyword(&value).unwrap_or(Token::Identifier(value))
    }

    fn unknown_byte(&mut self, c: u8) -> Result<(), Error> {
        match self.config.unknown_bytes {
            UnknownBytePolicy::Skip => {
                trace!(at = self.pos, byte = c, "skipped unrecognised byte");
                self.consume();
                Ok(())
            }
            UnknownBytePolicy::Reject => Err(Error::new(
                ErrorImpl::UnexpectedCharacter {
                    character: c as char,
                },
                self.position(self.pos),
            )),
        }
    }
}

pub fn tokenize(source: impl AsRef<[u8]>, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source.as_ref(), file, ScannerConfig::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(
    source: &[u8],
    file: Option<String>,
    config: ScannerConfig,
) -> Result<Vec<Token>, Error> {
    Scanner::new(source, file, config).scan()
}
