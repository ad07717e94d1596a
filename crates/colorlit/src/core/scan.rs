//! Lexical analysis of color literals.
//!
//! The scanner turns a lowercased literal into a stream of [`Token`]s on
//! demand. It skips white space before every token, which makes white space
//! insignificant everywhere between tokens, but never inside a token. Hence
//! `1 deg` is a number followed by a name, whereas `1deg` is a dimension.

use crate::error::SyntaxError;
use crate::Float;

/// A lexical token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token<'a> {
    /// A `#` followed by the run of ASCII letters and digits after it, which
    /// may well be empty.
    Hash(&'a str),
    /// A run of ASCII letters, i.e., a function name or keyword.
    Name(&'a str),
    /// A number without unit.
    Number(Float),
    /// A number followed by `%`.
    Percentage(Float),
    /// A number followed by a unit name.
    Dimension(Float, &'a str),
    OpenParen,
    CloseParen,
    Comma,
    Slash,
    /// The end of input. Scanning past the end keeps returning this token.
    End,
}

/// Determine whether the byte continues a name.
#[inline]
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// A scanner with one token of lookahead.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    source: &'a str,
    position: usize,
    lookahead: Option<Token<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            lookahead: None,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token<'a>, SyntaxError> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }

        let token = self.scan()?;
        self.lookahead = Some(token);
        Ok(token)
    }

    /// Consume the next token.
    pub fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    /// Consume the next token if it equals the expected one.
    pub fn accept(&mut self, expected: Token<'a>) -> Result<bool, SyntaxError> {
        if self.peek()? == expected {
            self.lookahead = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.as_bytes().get(index).copied()
    }

    fn skip_whitespace(&mut self) {
        while self
            .byte_at(self.position)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.position += 1;
        }
    }

    /// Consume bytes while the predicate holds and return them as a slice.
    /// The predicate must only accept ASCII bytes so that the slice always
    /// falls on character boundaries.
    fn take_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(u8) -> bool,
    {
        let start = self.position;
        while self.byte_at(self.position).is_some_and(&predicate) {
            self.position += 1;
        }

        let source = self.source;
        &source[start..self.position]
    }

    /// Consume decimal digits and return how many there were.
    fn skip_digits(&mut self) -> usize {
        self.take_while(|b| b.is_ascii_digit()).len()
    }

    fn scan(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.skip_whitespace();

        let Some(byte) = self.byte_at(self.position) else {
            return Ok(Token::End);
        };

        let token = match byte {
            b'(' => Token::OpenParen,
            b')' => Token::CloseParen,
            b',' => Token::Comma,
            b'/' => Token::Slash,
            b'#' => {
                self.position += 1;
                return Ok(Token::Hash(self.take_while(|b| b.is_ascii_alphanumeric())));
            }
            b'+' | b'-' | b'.' | b'0'..=b'9' => return self.scan_numeric(),
            _ if is_name_byte(byte) => return Ok(Token::Name(self.take_while(is_name_byte))),
            _ => return Err(SyntaxError::UnexpectedCharacter),
        };

        self.position += 1;
        Ok(token)
    }

    /// Scan a number, percentage, or dimension.
    ///
    /// Numbers have an optional sign, integral digits, fractional digits
    /// after a period, and an exponent after `e`. Either integral or
    /// fractional digits must be present. A period or `e` only belongs to the
    /// number if digits follow, so `1e` scans as dimension with unit `e`.
    fn scan_numeric(&mut self) -> Result<Token<'a>, SyntaxError> {
        let start = self.position;

        if matches!(self.byte_at(self.position), Some(b'+' | b'-')) {
            self.position += 1;
        }

        let integral = self.skip_digits();
        let mut fractional = 0;
        if self.byte_at(self.position) == Some(b'.')
            && self
                .byte_at(self.position + 1)
                .is_some_and(|b| b.is_ascii_digit())
        {
            self.position += 1;
            fractional = self.skip_digits();
        }

        if integral == 0 && fractional == 0 {
            return Err(SyntaxError::MalformedNumber);
        }

        if matches!(self.byte_at(self.position), Some(b'e' | b'E')) {
            let mut cursor = self.position + 1;
            if matches!(self.byte_at(cursor), Some(b'+' | b'-')) {
                cursor += 1;
            }
            if self.byte_at(cursor).is_some_and(|b| b.is_ascii_digit()) {
                self.position = cursor;
                self.skip_digits();
            }
        }

        let source = self.source;
        let value = source[start..self.position]
            .parse::<Float>()
            .map_err(|_| SyntaxError::MalformedNumber)?;

        match self.byte_at(self.position) {
            Some(b'%') => {
                self.position += 1;
                Ok(Token::Percentage(value))
            }
            Some(b) if is_name_byte(b) => Ok(Token::Dimension(value, self.take_while(is_name_byte))),
            _ => Ok(Token::Number(value)),
        }
    }
}

// ====================================================================================================================
