//! Benchmarks for the broadcasting hot loop.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. binary: vector against scalar through a binary built-in
//! 2. nary: several equal-length vectors through `sum`
//! 3. conditional: element-wise `if` over a vector condition

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tally_core::{
    expression::{Constant, Expression},
    function::Function,
    stdlib::{IF, LT, POW, SUM},
    values::Value,
};

fn ramp(len: usize) -> Box<dyn Expression> {
    let value = Value::vector((0..len).map(|i| i as f64)).expect("non-empty");
    Box::new(Constant::new(value))
}

fn scalar(x: f64) -> Box<dyn Expression> {
    Box::new(Constant::new(x))
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    for len in [1_000, 10_000, 150_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let args = [ramp(len), scalar(2.0)];
            b.iter(|| black_box(POW.eval(black_box(&args)).expect("pow failed")));
        });
    }
    group.finish();
}

fn bench_nary(c: &mut Criterion) {
    let mut group = c.benchmark_group("nary");
    for len in [1_000, 10_000, 150_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let args = [ramp(len), scalar(1.0), ramp(len), ramp(len)];
            b.iter(|| black_box(SUM.eval(black_box(&args)).expect("sum failed")));
        });
    }
    group.finish();
}

fn bench_conditional(c: &mut Criterion) {
    let mut group = c.benchmark_group("conditional");
    for len in [1_000, 150_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let condition = LT.eval(&[ramp(len), scalar(10.0)]).expect("lt failed");
            let args = [
                Box::new(Constant::new(condition)) as Box<dyn Expression>,
                ramp(len),
                scalar(0.0),
            ];
            b.iter(|| black_box(IF.eval(black_box(&args)).expect("if failed")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_binary, bench_nary, bench_conditional);
criterion_main!(benches);
