//! CLI output formatting for the machine-readable JSON mode.
//!
//! In JSON mode the CLI prints exactly one JSON object on stdout per run,
//! for integration with editors and CI systems. Errors carry the error
//! kind and, when one exists, the source location.

use lumen_lang::error::LumenError;
use lumen_lang::parser::ast::Program;
use serde::Serialize;
use std::path::Path;

/// Output mode for CLI execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output with ANSI colors (default)
    Text,
    /// Single JSON object once the run completes
    Json,
}

/// Error location with 1-indexed line and 0-indexed column.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// JSON output for errors.
#[derive(Debug, Clone, Serialize)]
pub struct JsonErrorOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ErrorLocation>,
}

/// JSON output for a front-end check run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCheckOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub status: &'static str,
    pub nodes: usize,
    pub functions: usize,
    pub variables: usize,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<String>,
}

/// JSON output for a compile run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCompileOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub status: &'static str,
    pub output: String,
    pub duration_ms: u64,
}

/// Format a `LumenError` as JSON error output.
pub fn format_error_json(error: &LumenError) -> String {
    let output = JsonErrorOutput {
        output_type: "error",
        kind: error.kind(),
        message: error.message().to_string(),
        location: error.position().map(|position| ErrorLocation {
            line: position.line,
            column: position.column,
        }),
    };

    serde_json::to_string(&output).unwrap()
}

/// Format a completed check run as JSON.
pub fn format_check_json(program: &Program, duration_ms: u64, ast: Option<String>) -> String {
    let output = JsonCheckOutput {
        output_type: "check",
        status: "complete",
        nodes: program.body.len(),
        functions: program.functions().len(),
        variables: program.variables().len(),
        duration_ms,
        ast,
    };

    serde_json::to_string(&output).unwrap()
}

/// Format a completed compile run as JSON.
pub fn format_compile_json(output_path: &Path, duration_ms: u64) -> String {
    let output = JsonCompileOutput {
        output_type: "compile",
        status: "complete",
        output: output_path.display().to_string(),
        duration_ms,
    };

    serde_json::to_string(&output).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_lang::lexer::Position;
    use lumen_lang::parser::parse;

    #[test]
    fn test_json_error_output_carries_the_location() {
        let error = LumenError::syntax(
            "Can't handle character: '@'",
            Position {
                offset: 8,
                line: 1,
                column: 8,
            },
        );
        let json = format_error_json(&error);
        assert!(json.contains(r#""type":"error""#));
        assert!(json.contains(r#""kind":"SyntaxError""#));
        assert!(json.contains(r#""message":"Can't handle character: '@'""#));
        assert!(json.contains(r#""line":1"#));
        assert!(json.contains(r#""column":8"#));
    }

    #[test]
    fn test_json_error_output_omits_missing_location() {
        let error = LumenError::semantic("Illegal return statement");
        let json = format_error_json(&error);
        assert!(json.contains(r#""kind":"SemanticError""#));
        assert!(!json.contains(r#""location""#));
    }

    #[test]
    fn test_json_check_output_serialization() {
        let program = parse("const x = 1 fun main() {}").unwrap();
        let json = format_check_json(&program, 5, None);
        assert!(json.contains(r#""type":"check""#));
        assert!(json.contains(r#""status":"complete""#));
        assert!(json.contains(r#""nodes":2"#));
        assert!(json.contains(r#""functions":1"#));
        assert!(json.contains(r#""variables":1"#));
        assert!(json.contains(r#""duration_ms":5"#));
        assert!(!json.contains(r#""ast""#));
    }

    #[test]
    fn test_json_check_output_includes_requested_ast() {
        let program = parse("fun main() {}").unwrap();
        let json = format_check_json(&program, 0, Some(format!("{:#?}", program)));
        assert!(json.contains(r#""ast":"Program {"#));
    }

    #[test]
    fn test_json_compile_output_serialization() {
        let json = format_compile_json(Path::new("/tmp/out.ll"), 12);
        assert!(json.contains(r#""type":"compile""#));
        assert!(json.contains(r#""status":"complete""#));
        assert!(json.contains(r#""output":"/tmp/out.ll""#));
        assert!(json.contains(r#""duration_ms":12"#));
    }
}
