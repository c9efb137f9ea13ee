//! Benchmarks for the Lumen front end
//!
//! Measures performance of:
//! - Lexer throughput
//! - Parser throughput
//! - Full build pipeline (parse, analyze, emit)

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lumen_lang::codegen::pipeline::Pipeline;
use lumen_lang::lexer::{Lexer, Token};
use lumen_lang::parser;

/// Simple arithmetic expression
const SIMPLE_EXPR: &str = "1 + 2 * 3";

/// Operator chain that climbs the whole precedence table
const CLIMB_EXPR: &str = "1 = 2 || 3 && 4 < 5 + 6 * 7";

/// Smallest buildable program
const MAIN_ONLY: &str = "fun main() {}";

/// Declarations, a typed signature and calls
const DECLARATIONS: &str = r#"
const limit = 100
let label = "total"

fun helper() { return 1 + 2 * 3 }

fun main(args: String): Void {
    helper()
}
"#;

/// Enum with explicit and defaulted member values
const ENUM_SOURCE: &str = r#"
enum Animal { DOG = "dog", CAT = 5, MONKE }

fun main() {}
"#;

fn drain_tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next().unwrap() {
        tokens.push(token);
    }
    tokens
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("climb", CLIMB_EXPR),
        ("declarations", DECLARATIONS),
        ("enum", ENUM_SOURCE),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("lex", name), source, |b, source| {
            b.iter(|| drain_tokens(black_box(source)))
        });
    }

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("climb", CLIMB_EXPR),
        ("declarations", DECLARATIONS),
        ("enum", ENUM_SOURCE),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("parse", name), source, |b, source| {
            b.iter(|| parser::parse(black_box(source)).unwrap())
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let test_cases = [
        ("minimal", MAIN_ONLY),
        ("declarations", DECLARATIONS),
        ("enum", ENUM_SOURCE),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("build", name), source, |b, source| {
            b.iter(|| Pipeline::new().build(black_box(source)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer, bench_parser, bench_pipeline);
criterion_main!(benches);
