//! Tokenizer for the Lumen language.
//!
//! The lexer pulls characters from a [`Cursor`] and serves classified
//! tokens on demand, holding at most one token of lookahead. Faults halt
//! the stream with a [`SyntaxError`] at the current position.

pub mod cursor;
pub mod token;

pub use cursor::{Cursor, Position};
pub use token::{Keyword, Token};


use crate::error::SyntaxError;

/// Pull-model token stream with one token of lookahead.
pub struct Lexer {
    cursor: Cursor,
    current: Option<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            current: None,
        }
    }

    /// Return the next token without consuming it. `Ok(None)` means end
    /// of input.
    pub fn peek(&mut self) -> Result<Option<&Token>, SyntaxError> {
        if self.current.is_none() {
            self.current = self.read_next()?;
        }
        Ok(self.current.as_ref())
    }

    /// Consume and return the next token. `Ok(None)` means end of input.
    pub fn next(&mut self) -> Result<Option<Token>, SyntaxError> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.read_next(),
        }
    }

    pub fn is_at_end(&mut self) -> Result<bool, SyntaxError> {
        Ok(self.peek()?.is_none())
    }

    /// Current position of the underlying character stream.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    fn read_next(&mut self) -> Result<Option<Token>, SyntaxError> {
        loop {
            self.skip_whitespace();

            let ch = match self.cursor.peek() {
                Some(ch) => ch,
                None => return Ok(None),
            };

            if ch == '#' {
                self.skip_comment();
                continue;
            }

            let token = match ch {
                '"' => self.read_string(),
                ch if ch.is_ascii_digit() => self.read_number()?,
                ch if is_identifier_char(ch) => self.read_identifier(),
                ch if is_punctuation_char(ch) => {
                    self.cursor.next();
                    Token::Punctuation(ch)
                }
                ch if is_operator_char(ch) => self.read_operator(),
                ch => {
                    return Err(SyntaxError::new(
                        format!("Can't handle character: '{}'", ch),
                        self.cursor.position(),
                    ))
                }
            };

            return Ok(Some(token));
        }
    }

    fn skip_whitespace(&mut self) {
        self.read_while(is_whitespace);
    }

    fn skip_comment(&mut self) {
        self.read_while(|ch| ch != '\n');
        self.cursor.next();
    }

    fn read_string(&mut self) -> Token {
        Token::String(self.read_escaped('"'))
    }

    // A backslash takes the following character verbatim. Reaching end of
    // input before the closing delimiter yields the text accumulated so far.
    fn read_escaped(&mut self, end: char) -> String {
        let mut text = String::new();
        let mut escaped = false;

        self.cursor.next();
        while let Some(ch) = self.cursor.next() {
            if escaped {
                text.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == end {
                break;
            } else {
                text.push(ch);
            }
        }

        text
    }

    // At most one decimal point; a second terminates the number without
    // being consumed.
    fn read_number(&mut self) -> Result<Token, SyntaxError> {
        let start = self.cursor.position();
        let mut has_dot = false;

        let text = self.read_while(|ch| {
            if ch == '.' {
                if has_dot {
                    return false;
                }
                has_dot = true;
                return true;
            }
            ch.is_ascii_digit()
        });

        if has_dot {
            text.parse::<f64>()
                .map(Token::Float)
                .map_err(|_| SyntaxError::new(format!("Invalid number: \"{}\"", text), start))
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| SyntaxError::new(format!("Invalid number: \"{}\"", text), start))
        }
    }

    fn read_identifier(&mut self) -> Token {
        let text = self.read_while(is_identifier_char);
        match Keyword::lookup(&text) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(text),
        }
    }

    fn read_operator(&mut self) -> Token {
        Token::Operator(self.read_while(is_operator_char))
    }

    fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !predicate(ch) {
                break;
            }
            self.cursor.next();
            text.push(ch);
        }
        text
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_punctuation_char(ch: char) -> bool {
    matches!(ch, ',' | ':' | ';' | '(' | ')' | '{' | '}' | '[' | ']')
}

fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '<' | '>' | '!'
    )
}
