//! Token vocabulary for the Lumen language.

/// Reserved words. An identifier that matches one of these is always
/// lexed as a keyword token, never as an `Identifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    True,
    False,
    Fun,
    None,
    Return,
    For,
    While,
    Const,
    Let,
    Enum,
    Class,
    Break,
    As,
    Import,
    From,
    Export,
    In,
    Not,
    Struct,
    Throw,
}

impl Keyword {
    /// Map reserved identifier text to its keyword, if any.
    pub fn lookup(text: &str) -> Option<Keyword> {
        let keyword = match text {
            "if" => Keyword::If,
            "true" => Keyword::True,
            "false" => Keyword::False,
            "fun" => Keyword::Fun,
            "none" => Keyword::None,
            "return" => Keyword::Return,
            "for" => Keyword::For,
            "while" => Keyword::While,
            "const" => Keyword::Const,
            "let" => Keyword::Let,
            "enum" => Keyword::Enum,
            "class" => Keyword::Class,
            "break" => Keyword::Break,
            "as" => Keyword::As,
            "import" => Keyword::Import,
            "from" => Keyword::From,
            "export" => Keyword::Export,
            "in" => Keyword::In,
            "not" => Keyword::Not,
            "struct" => Keyword::Struct,
            "throw" => Keyword::Throw,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Fun => "fun",
            Keyword::None => "none",
            Keyword::Return => "return",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Const => "const",
            Keyword::Let => "let",
            Keyword::Enum => "enum",
            Keyword::Class => "class",
            Keyword::Break => "break",
            Keyword::As => "as",
            Keyword::Import => "import",
            Keyword::From => "from",
            Keyword::Export => "export",
            Keyword::In => "in",
            Keyword::Not => "not",
            Keyword::Struct => "struct",
            Keyword::Throw => "throw",
        }
    }
}

/// A classified unit of source text, carrying its payload.
///
/// Tokens carry no position; diagnostics report the stream's current
/// position at the point of failure instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    Keyword(Keyword),
    /// String literal with escape sequences already resolved.
    String(String),
    Integer(i64),
    Float(f64),
    /// Single punctuation character: one of `, : ; ( ) { } [ ]`.
    Punctuation(char),
    /// Maximal run of operator characters, e.g. `==` or `**`.
    Operator(String),
}
