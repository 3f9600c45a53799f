//! Unification and inference benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use letrec_syntax::{Span, parse};
use letrec_typecheck::{Subst, Ty, TypeEnv, infer_program_type, unify};

/// `t_1 -> t_2 -> ... -> t_n` against `int -> int -> ... -> int`.
fn chain(depth: u32) -> (Ty, Ty) {
    let mut vars = Ty::Var(depth + 1);
    let mut ints = Ty::int();
    for v in (1..=depth).rev() {
        vars = Ty::proc(Ty::Var(v), vars);
        ints = Ty::proc(Ty::int(), ints);
    }
    (vars, ints)
}

fn bench_unify_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("unify_chain");

    for depth in [8, 64, 256] {
        let (lhs, rhs) = chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                let mut subst = Subst::new();
                unify(black_box(&lhs), black_box(&rhs), &mut subst, Span::DUMMY).ok();
                subst
            });
        });
    }

    group.finish();
}

fn bench_infer_program(c: &mut Criterion) {
    let source = "letrec double (x) = if zero?(x) then 0 else -((double -(x, 1)), -2) \
                  in let compose = proc (f) proc (g) proc (x) (f (g x)) \
                  in (((compose double) double) 3)";
    let (expr, interner) = match parse(source) {
        Ok(parsed) => parsed,
        Err(err) => panic!("benchmark program does not parse: {err}"),
    };

    c.bench_function("infer_program", |b| {
        b.iter(|| infer_program_type(black_box(&expr), &interner, TypeEnv::new()).ok());
    });
}

criterion_group!(benches, bench_unify_chain, bench_infer_program);
criterion_main!(benches);
