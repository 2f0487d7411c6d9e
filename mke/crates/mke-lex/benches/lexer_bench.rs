//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package mke-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mke_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let add = fn(x, y) { x + y; }; let result = add(five, ten);";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let five = 5;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let unit = r#"
        let fib = fn(n) {
            if (n < 2) {
                return n;
            } else {
                return fib(n - 1) + fib(n - 2);
            }
        };
        let ok = !(fib(10) == 55) != false;
    "#;
    let source = unit.repeat(200);

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_program", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let very_long_variable_name = 42;")))
    });

    group.bench_function("long_integer", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 12345678901234567890;")))
    });

    group.bench_function("illegal_run", |b| {
        b.iter(|| lexer_token_count(black_box("@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_literals
);
criterion_main!(benches);
