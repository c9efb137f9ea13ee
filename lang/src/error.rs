//! Unified error handling for the Lumen front end.
//!
//! Each stage reports its own error type (`SyntaxError` for the lexer and
//! parser, `SemanticError` for the analyzer, the codegen errors for the back
//! half); `LumenError` folds them into one type for callers that only want
//! to report. Positioned diagnostics render as three lines: the offending
//! source line, a caret run of the same length, and a classified one-line
//! summary.


use crate::lexer::cursor::Position;
use std::fmt;

/// Diagnostic for lexical and grammatical faults.
///
/// The lexer and parser share this type: both halt on the first fault and
/// report it at the stream's current position.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            message: message.into(),
            position,
        }
    }

    /// Render the three-line diagnostic against the source text the error
    /// was produced from.
    pub fn render(&self, source: &str) -> String {
        render_with_context(source, self.position, &self.to_string())
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SyntaxError: {} at line {} column {}",
            self.message, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Program-shape fault found after parsing, e.g. a top-level `return`.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub message: String,
}

impl SemanticError {
    pub fn new(message: impl Into<String>) -> Self {
        SemanticError {
            message: message.into(),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticError: {}", self.message)
    }
}

impl std::error::Error for SemanticError {}

/// A unified error type covering every stage of a build.
///
/// Stage errors convert into this via `From`, so pipeline code can use `?`
/// throughout and still hand callers a single reportable type.
#[derive(Debug, Clone, PartialEq)]
pub enum LumenError {
    /// Lexical or grammatical fault, positioned in the source.
    Syntax { message: String, position: Position },

    /// Fault in the shape of an otherwise well-formed program.
    Semantic { message: String },

    /// Code generation or output fault.
    Compile { message: String },
}

impl LumenError {
    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        LumenError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        LumenError::Semantic {
            message: message.into(),
        }
    }

    pub fn compile(message: impl Into<String>) -> Self {
        LumenError::Compile {
            message: message.into(),
        }
    }

    /// Short error kind description (e.g. "SyntaxError").
    pub fn kind(&self) -> &'static str {
        match self {
            LumenError::Syntax { .. } => "SyntaxError",
            LumenError::Semantic { .. } => "SemanticError",
            LumenError::Compile { .. } => "CompileError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LumenError::Syntax { message, .. } => message,
            LumenError::Semantic { message } => message,
            LumenError::Compile { message } => message,
        }
    }

    /// Source position, for errors that carry one.
    pub fn position(&self) -> Option<Position> {
        match self {
            LumenError::Syntax { position, .. } => Some(*position),
            LumenError::Semantic { .. } => None,
            LumenError::Compile { .. } => None,
        }
    }

    /// Render against the originating source: positioned errors get the
    /// three-line diagnostic, the rest just the one-line summary.
    pub fn render(&self, source: &str) -> String {
        match self.position() {
            Some(position) => render_with_context(source, position, &self.to_string()),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for LumenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LumenError::Syntax { message, position } => {
                write!(
                    f,
                    "SyntaxError: {} at line {} column {}",
                    message, position.line, position.column
                )
            }
            LumenError::Semantic { message } => write!(f, "SemanticError: {}", message),
            LumenError::Compile { message } => write!(f, "CompileError: {}", message),
        }
    }
}

impl std::error::Error for LumenError {}

fn render_with_context(source: &str, position: Position, summary: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    let line = normalized
        .split('\n')
        .nth(position.line.saturating_sub(1) as usize)
        .unwrap_or("");
    format!("{}\n{}\n{}", line, "^".repeat(line.chars().count()), summary)
}

// Conversions from the stage error types

impl From<SyntaxError> for LumenError {
    fn from(err: SyntaxError) -> Self {
        LumenError::Syntax {
            message: err.message,
            position: err.position,
        }
    }
}

impl From<SemanticError> for LumenError {
    fn from(err: SemanticError) -> Self {
        LumenError::Semantic {
            message: err.message,
        }
    }
}

impl From<crate::codegen::compiler::CompileError> for LumenError {
    fn from(err: crate::codegen::compiler::CompileError) -> Self {
        LumenError::compile(err.to_string())
    }
}

impl From<crate::codegen::pipeline::BuildError> for LumenError {
    fn from(err: crate::codegen::pipeline::BuildError) -> Self {
        use crate::codegen::pipeline::BuildError;
        match err {
            BuildError::Syntax(err) => err.into(),
            BuildError::Semantic(err) => err.into(),
            BuildError::Compile(err) => err.into(),
            BuildError::OutputNotFound(path) => {
                LumenError::compile(format!("File {} does not exist", path.display()))
            }
            BuildError::OutputNotWritable(path) => {
                LumenError::compile(format!("Can not write to file {}", path.display()))
            }
            BuildError::Io(err) => LumenError::compile(format!("I/O error: {}", err)),
        }
    }
}
