//! Character stream over normalized source text.
//!
//! The cursor is the single source of truth for positions: it owns the
//! current `Position` and advances it as characters are consumed. Line
//! endings are normalized (`\r\n` becomes `\n`) before any character is
//! served, so positions are stable across platforms.

/// Location in source text.
///
/// `offset` counts consumed characters from the start of the input,
/// `line` is 1-based and `column` is the 0-based column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

/// One-character-at-a-time reader over source text.
pub struct Cursor {
    input: Vec<char>,
    position: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            input: source.replace("\r\n", "\n").chars().collect(),
            position: Position::start(),
        }
    }

    /// Consume and return the next character, advancing the position.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.input.get(self.position.offset).copied()?;
        self.position.advance(ch);
        Some(ch)
    }

    /// Return the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position.offset).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
