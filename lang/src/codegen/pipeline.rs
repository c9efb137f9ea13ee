//! Build pipeline for Lumen programs.
//!
//! One build runs the whole front end over a source text:
//! 1. Parse source code
//! 2. Analyze program shape
//! 3. Generate textual IR
//! 4. Write the module to an existing output file
//!
//! The output file is checked before any other work starts: it must
//! already exist and be writable. Nothing is written on failure.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::compiler::{CompileError, Compiler};
use crate::analyzer::Analyzer;
use crate::error::{SemanticError, SyntaxError};
use crate::parser::parse;

/// Errors that can occur during a build
#[derive(Debug)]
pub enum BuildError {
    Syntax(SyntaxError),
    Semantic(SemanticError),
    Compile(CompileError),
    /// The output file does not exist.
    OutputNotFound(PathBuf),
    /// The output file exists but is not writable.
    OutputNotWritable(PathBuf),
    Io(std::io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Syntax(err) => write!(f, "{}", err),
            BuildError::Semantic(err) => write!(f, "{}", err),
            BuildError::Compile(err) => write!(f, "CompileError: {}", err),
            BuildError::OutputNotFound(path) => {
                write!(f, "File {} does not exist", path.display())
            }
            BuildError::OutputNotWritable(path) => {
                write!(f, "Can not write to file {}", path.display())
            }
            BuildError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<SyntaxError> for BuildError {
    fn from(err: SyntaxError) -> Self {
        BuildError::Syntax(err)
    }
}

impl From<SemanticError> for BuildError {
    fn from(err: SemanticError) -> Self {
        BuildError::Semantic(err)
    }
}

impl From<CompileError> for BuildError {
    fn from(err: CompileError) -> Self {
        BuildError::Compile(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

/// A finished build: the printed module and how long the run took.
pub struct Build {
    pub ir: String,
    pub duration: Duration,
}

/// The build pipeline
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Parse, analyze and compile a source text.
    pub fn build(&self, source: &str) -> Result<Build, BuildError> {
        let started = Instant::now();

        let program = parse(source)?;
        Analyzer::new(&program).analyze()?;
        let ir = Compiler::new(&program).compile()?;

        Ok(Build {
            ir,
            duration: started.elapsed(),
        })
    }

    /// Build a source text and write the module to `output`.
    pub fn build_to_file(&self, source: &str, output: &Path) -> Result<Build, BuildError> {
        if !output.exists() {
            return Err(BuildError::OutputNotFound(output.to_path_buf()));
        }
        if fs::metadata(output)?.permissions().readonly() {
            return Err(BuildError::OutputNotWritable(output.to_path_buf()));
        }

        let build = self.build(source)?;
        fs::write(output, &build.ir)?;

        Ok(build)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a unique temp filename using thread ID and nanos
    fn unique_path(base: &str, ext: &str) -> PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let unique_id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let thread_id = std::thread::current().id();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "{}_{:?}_{}_{}.{}",
            base, thread_id, unique_id, counter, ext
        ))
    }

    #[test]
    fn build_produces_module_for_main() {
        let build = Pipeline::new().build("fun main() {}").unwrap();
        assert!(build.ir.contains("define i32 @main()"));
    }

    #[test]
    fn build_rejects_program_without_main() {
        let result = Pipeline::new().build("const x = 1");
        assert!(matches!(
            result,
            Err(BuildError::Compile(CompileError::MissingMain))
        ));
    }

    #[test]
    fn build_surfaces_syntax_errors() {
        let result = Pipeline::new().build("fun main( {}");
        assert!(matches!(result, Err(BuildError::Syntax(_))));
    }

    #[test]
    fn build_surfaces_semantic_errors() {
        let result = Pipeline::new().build("return 1");
        assert!(matches!(result, Err(BuildError::Semantic(_))));
    }

    #[test]
    fn build_to_file_writes_existing_output() {
        let output = unique_path("lumen_build", "ll");
        fs::write(&output, "").unwrap();

        let build = Pipeline::new()
            .build_to_file("fun main() {}", &output)
            .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), build.ir);

        fs::remove_file(&output).ok();
    }

    #[test]
    fn build_to_file_requires_existing_output() {
        let output = unique_path("lumen_missing", "ll");

        let result = Pipeline::new().build_to_file("fun main() {}", &output);
        assert!(matches!(result, Err(BuildError::OutputNotFound(_))));
    }

    #[test]
    fn build_to_file_requires_writable_output() {
        let output = unique_path("lumen_readonly", "ll");
        fs::write(&output, "").unwrap();
        let mut permissions = fs::metadata(&output).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&output, permissions).unwrap();

        let result = Pipeline::new().build_to_file("fun main() {}", &output);
        assert!(matches!(result, Err(BuildError::OutputNotWritable(_))));

        let mut permissions = fs::metadata(&output).unwrap().permissions();
        permissions.set_readonly(false);
        fs::set_permissions(&output, permissions).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn failed_build_leaves_output_untouched() {
        let output = unique_path("lumen_untouched", "ll");
        fs::write(&output, "previous contents").unwrap();

        let result = Pipeline::new().build_to_file("const x = 1", &output);
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "previous contents"
        );

        fs::remove_file(&output).ok();
    }
}
