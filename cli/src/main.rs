//! Lumen CLI - language front end
//!
//! Usage:
//!   lumen-cli <SCRIPT>           Check a source file
//!   lumen-cli -e <CODE>          Check an inline source string
//!   lumen-cli -c <OUTPUT>        Compile and write the IR module to <OUTPUT>
//!   lumen-cli --ast              Print the parsed tree
//!   lumen-cli -o <FORMAT>        Output format: text (default), json
//!   cat file | lumen-cli         Read source from stdin

mod output;

use clap::Parser;
use output::{format_check_json, format_compile_json, format_error_json, OutputMode};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use lumen_lang::analyzer::Analyzer;
use lumen_lang::codegen::pipeline::Pipeline;
use lumen_lang::error::LumenError;
use lumen_lang::parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"Lumen language front end {}

USAGE:
    lumen-cli <SCRIPT>              Check a source file
    lumen-cli -e <CODE>             Check an inline source string
    lumen-cli -c <OUTPUT> <SCRIPT>  Compile to textual IR at <OUTPUT>
    lumen-cli --ast <SCRIPT>        Print the parsed tree
    lumen-cli -o <FORMAT>           Output format (text, json)
    lumen-cli -h                    Show this help
    cat file | lumen-cli            Read from stdin

OPTIONS:
    -e, --eval <CODE>       Check an inline source string
    -c, --compile <OUTPUT>  Compile and write the IR module to <OUTPUT>
                            (the file must already exist)
        --ast               Print the parsed tree before the summary
        --time              Report front-end timing
    -o, --output <FORMAT>   Output format: text (default), json
    -h, --help              Show this help message
    -v, --version           Display version information"#,
        VERSION
    );
}

fn print_version() {
    println!("lumen {}", VERSION);
}

/// Lumen language front end
#[derive(Parser, Debug)]
#[command(name = "lumen-cli")]
#[command(version, about = "Lumen language front end", long_about = None)]
#[command(disable_version_flag = true, disable_help_flag = true)]
struct Args {
    /// Print version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Show help message
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// The script file to check (optional if using -e or stdin)
    script: Option<PathBuf>,

    /// Check an inline source string
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Compile and write the IR module to this path (the file must exist)
    #[arg(short = 'c', long = "compile", value_name = "OUTPUT")]
    compile: Option<PathBuf>,

    /// Print the parsed tree
    #[arg(long = "ast")]
    ast: bool,

    /// Report front-end timing
    #[arg(long = "time")]
    time: bool,

    /// Output format: text (default), json
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,
}

/// Parse the output mode from CLI args.
fn parse_output_mode(args: &Args) -> Result<OutputMode, String> {
    match args.output.as_deref() {
        None | Some("text") => Ok(OutputMode::Text),
        Some("json") => Ok(OutputMode::Json),
        Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json", other)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Handle --help flag
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    // Handle --version flag
    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let output_mode = match parse_output_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    // Determine source: -e flag > file argument > stdin
    let source = match get_source(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    // Compile mode: build and write the module, then exit
    if let Some(ref output_path) = args.compile {
        return compile_to_file(&source, output_path, output_mode);
    }

    check_source(&args, &source, output_mode)
}

fn get_source(args: &Args) -> Result<String, String> {
    // Priority: -e flag > file argument > stdin
    if let Some(ref eval_source) = args.eval {
        return Ok(eval_source.clone());
    }

    if let Some(ref script_path) = args.script {
        return std::fs::read_to_string(script_path)
            .map_err(|e| format!("Error reading file {:?}: {}", script_path, e));
    }

    // Try stdin if not a TTY
    if !atty::is(atty::Stream::Stdin) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Error reading from stdin: {}", e))?;
        return Ok(content);
    }

    Err("No input provided. Use: lumen-cli <SCRIPT>, lumen-cli -e <CODE>, or pipe to stdin".to_string())
}

/// Parse and analyze the source, reporting what the front end saw.
fn check_source(args: &Args, source: &str, output_mode: OutputMode) -> ExitCode {
    let started = Instant::now();

    let program = match parser::parse(source) {
        Ok(program) => program,
        Err(e) => return report_error(&e.into(), source, output_mode),
    };

    if let Err(e) = Analyzer::new(&program).analyze() {
        return report_error(&e.into(), source, output_mode);
    }

    let duration_ms = started.elapsed().as_millis() as u64;
    let ast = if args.ast {
        Some(format!("{:#?}", program))
    } else {
        None
    };

    match output_mode {
        OutputMode::Text => {
            if let Some(ref tree) = ast {
                println!("{}", tree);
            }
            if args.time {
                println!(
                    "Parsed {} top-level nodes \x1b[90m{}ms\x1b[0m",
                    program.body.len(),
                    duration_ms
                );
            } else {
                println!("Parsed {} top-level nodes", program.body.len());
            }
        }
        OutputMode::Json => {
            println!("{}", format_check_json(&program, duration_ms, ast));
        }
    }

    ExitCode::SUCCESS
}

/// Build the source and write the IR module to `output_path`.
fn compile_to_file(source: &str, output_path: &Path, output_mode: OutputMode) -> ExitCode {
    match Pipeline::new().build_to_file(source, output_path) {
        Ok(build) => {
            match output_mode {
                OutputMode::Text => println!("Compiled to: {}", output_path.display()),
                OutputMode::Json => println!(
                    "{}",
                    format_compile_json(output_path, build.duration.as_millis() as u64)
                ),
            }
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e.into(), source, output_mode),
    }
}

/// Report an error on the channel the output mode calls for and exit code 2.
///
/// Text mode renders the positioned diagnostic on stderr; JSON mode prints a
/// single error object on stdout.
fn report_error(error: &LumenError, source: &str, output_mode: OutputMode) -> ExitCode {
    match output_mode {
        OutputMode::Text => eprintln!("{}", error.render(source)),
        OutputMode::Json => println!("{}", format_error_json(error)),
    }
    ExitCode::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_check_mode() {
        let args = Args::try_parse_from(["lumen-cli", "main.lm"]).unwrap();
        assert_eq!(args.script, Some(PathBuf::from("main.lm")));
        assert!(args.eval.is_none());
        assert!(args.compile.is_none());
    }

    #[test]
    fn parse_args_eval_mode() {
        let args = Args::try_parse_from(["lumen-cli", "-e", "fun main() {}"]).unwrap();
        assert_eq!(args.eval, Some("fun main() {}".to_string()));
        assert!(args.script.is_none());
    }

    #[test]
    fn parse_args_eval_mode_long() {
        let args = Args::try_parse_from(["lumen-cli", "--eval", "const x = 1"]).unwrap();
        assert_eq!(args.eval, Some("const x = 1".to_string()));
    }

    #[test]
    fn parse_args_compile_mode() {
        let args = Args::try_parse_from(["lumen-cli", "-c", "out.ll", "main.lm"]).unwrap();
        assert_eq!(args.compile, Some(PathBuf::from("out.ll")));
        assert_eq!(args.script, Some(PathBuf::from("main.lm")));
    }

    #[test]
    fn parse_args_compile_mode_long() {
        let args =
            Args::try_parse_from(["lumen-cli", "--compile", "build/out.ll", "main.lm"]).unwrap();
        assert_eq!(args.compile, Some(PathBuf::from("build/out.ll")));
    }

    #[test]
    fn parse_args_ast_and_time() {
        let args = Args::try_parse_from(["lumen-cli", "--ast", "--time", "main.lm"]).unwrap();
        assert!(args.ast);
        assert!(args.time);
    }

    #[test]
    fn parse_args_output_json() {
        let args = Args::try_parse_from(["lumen-cli", "-o", "json", "-e", "1"]).unwrap();
        assert_eq!(args.output, Some("json".to_string()));
    }

    #[test]
    fn parse_args_output_long() {
        let args = Args::try_parse_from(["lumen-cli", "--output", "json", "-e", "1"]).unwrap();
        assert_eq!(args.output, Some("json".to_string()));
    }

    #[test]
    fn parse_output_mode_default() {
        let args = Args::try_parse_from(["lumen-cli", "-e", "1"]).unwrap();
        assert_eq!(parse_output_mode(&args), Ok(OutputMode::Text));
    }

    #[test]
    fn parse_output_mode_text() {
        let args = Args::try_parse_from(["lumen-cli", "-o", "text", "-e", "1"]).unwrap();
        assert_eq!(parse_output_mode(&args), Ok(OutputMode::Text));
    }

    #[test]
    fn parse_output_mode_json() {
        let args = Args::try_parse_from(["lumen-cli", "-o", "json", "-e", "1"]).unwrap();
        assert_eq!(parse_output_mode(&args), Ok(OutputMode::Json));
    }

    #[test]
    fn parse_output_mode_invalid() {
        let args = Args::try_parse_from(["lumen-cli", "-o", "xml", "-e", "1"]).unwrap();
        assert!(parse_output_mode(&args).is_err());
    }
}
