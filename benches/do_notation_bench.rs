//! Benchmark for do-notation blocks.
//!
//! Measures the cost of an instrumented function against the same logic
//! written with `match`.

use criterion::{Criterion, criterion_group, criterion_main};
use rightward::prelude::*;
use std::hint::black_box;

#[do_notation]
fn sum_three(
    a: Outcome<i64, String>,
    b: Outcome<i64, String>,
    c: Outcome<i64, String>,
    scope: Scope,
) -> Outcome<i64, String> {
    let a = scope.unwrap(a)?;
    let b = scope.unwrap(b)?;
    let c = scope.unwrap(c)?;
    Outcome::success(a + b + c)
}

fn sum_three_by_hand(
    a: Outcome<i64, String>,
    b: Outcome<i64, String>,
    c: Outcome<i64, String>,
) -> Outcome<i64, String> {
    a.bind(|a| b.bind(|b| c.fmap(|c| a + b + c)))
}

fn benchmark_sum_three(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sum_three");

    group.bench_function("do_notation_success", |bencher| {
        bencher.iter(|| {
            black_box(sum_three(
                Outcome::success(black_box(1)),
                Outcome::success(black_box(2)),
                Outcome::success(black_box(3)),
            ))
        });
    });

    group.bench_function("bind_chain_success", |bencher| {
        bencher.iter(|| {
            black_box(sum_three_by_hand(
                Outcome::success(black_box(1)),
                Outcome::success(black_box(2)),
                Outcome::success(black_box(3)),
            ))
        });
    });

    group.bench_function("do_notation_halt", |bencher| {
        bencher.iter(|| {
            black_box(sum_three(
                Outcome::success(black_box(1)),
                Outcome::failure("missing".to_string()),
                Outcome::success(black_box(3)),
            ))
        });
    });

    group.finish();
}

fn benchmark_unwrap_all(criterion: &mut Criterion) {
    criterion.bench_function("unwrap_all_four", |bencher| {
        bencher.iter(|| {
            black_box(run::<Maybe<i32>, _>(|scope| {
                let (a, b, c, d) = scope.unwrap_all((
                    Maybe::just(black_box(1)),
                    Some(black_box(2)),
                    Maybe::just(black_box(3)),
                    Some(black_box(4)),
                ))?;
                Ok(Maybe::just(a + b + c + d))
            }))
        });
    });
}

criterion_group!(benches, benchmark_sum_three, benchmark_unwrap_all);
criterion_main!(benches);
