use super::context::CodegenContext;
use crate::parser::ast::Program;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// No `main` function declared to anchor the module.
    MissingMain,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MissingMain => {
                write!(f, "Can not compile code without a main function")
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Emits the IR module for a validated program.
///
/// Lowering of user code is not wired up yet: every accepted program
/// prints the same greeting module, but a program is only accepted when
/// it declares a `main` function to anchor it.
pub struct Compiler<'a> {
    program: &'a Program,
}

impl<'a> Compiler<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    pub fn compile(&self) -> Result<String, CompileError> {
        if !self.program.has_function("main") {
            return Err(CompileError::MissingMain);
        }

        let mut module = CodegenContext::new("main");
        module.add_global_string("hello_world", "Hello, World\n");
        module.add_function(
            "main",
            "i32",
            vec!["call void @print()".to_string(), "ret i32 16".to_string()],
        );
        module.add_function("print", "void", vec!["ret void".to_string()]);

        Ok(module.print())
    }
}
