//! Program-shape checks that run between parsing and code generation.

use crate::error::SemanticError;
use crate::parser::ast::{Node, Program};

/// Validates the shape of a parsed program before it is handed to the
/// code generator.
pub struct Analyzer<'a> {
    program: &'a Program,
}

impl<'a> Analyzer<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    /// Reject programs whose top level contains a `return`. Returns are
    /// only meaningful inside a function body.
    pub fn analyze(&self) -> Result<(), SemanticError> {
        let illegal_return = self
            .program
            .body
            .iter()
            .any(|node| matches!(node, Node::Return { .. }));

        if illegal_return {
            return Err(SemanticError::new("Illegal return statement"));
        }

        Ok(())
    }
}
