//! Benchmarks for error construction and chain walking

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cryypt_errors::{code, has_code, stack, Code, Error, Options};

fn build_chain(depth: usize) -> Error {
    let mut chain = Error::new_code(Code::NOT_FOUND, "root");
    for level in 1..depth {
        chain = match Error::wrap(Some(chain), format!("level {level}")) {
            Some(wrapped) => wrapped,
            None => unreachable!("cause is present"),
        };
    }
    chain
}

/// Benchmark node construction with and without stack capture
fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("new_code_with_stack", |b| {
        b.iter(|| std::hint::black_box(Error::new_code(Code::INTERNAL, "boom")));
    });

    group.bench_function("options_without_stack", |b| {
        b.iter(|| {
            std::hint::black_box(Error::with_options(
                Options::new().code(Code::INTERNAL).text("boom"),
            ))
        });
    });

    group.finish();
}

/// Benchmark the walkers across chain depths
fn benchmark_walkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("walkers");

    for depth in [1usize, 8, 32] {
        let chain = build_chain(depth);

        group.bench_with_input(BenchmarkId::new("code", depth), &chain, |b, chain| {
            b.iter(|| std::hint::black_box(code(chain)));
        });

        group.bench_with_input(BenchmarkId::new("has_code", depth), &chain, |b, chain| {
            b.iter(|| std::hint::black_box(has_code(chain, &Code::NOT_FOUND)));
        });
    }

    let chain = build_chain(4);
    group.bench_function("stack_render", |b| {
        b.iter(|| std::hint::black_box(stack(&chain)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_walkers);
criterion_main!(benches);
