//! Lexer and parser throughput on a generated program.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use letrec_syntax::{Lexer, parse};

/// `let x0 = 0 in let x1 = -(x0, 1) in ... in xN`
fn let_chain(depth: usize) -> String {
    let mut src = String::from("let x0 = 0 in ");
    for i in 1..depth {
        src.push_str(&format!("let x{i} = -(x{}, 1) in ", i - 1));
    }
    src.push_str(&format!("x{}", depth - 1));
    src
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");

    for depth in [10, 100, 1_000] {
        let src = let_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &src, |b, src| {
            b.iter(|| black_box(Lexer::new(src).lex()));
        });
    }

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for depth in [10, 100, 1_000] {
        let src = let_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &src, |b, src| {
            b.iter(|| black_box(parse(src)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer, bench_parser);
criterion_main!(benches);
