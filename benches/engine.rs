//! Benchmarks for the calculator engine.
//!
//! These benchmarks measure result formatting and key sequence handling.

use calc_tui::engine::{format::format_number, CalculatorEngine, Input, Operator, DEFAULT_MAX_LENGTH};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_format_integer(c: &mut Criterion) {
    c.bench_function("format_number_integer", |b| {
        b.iter(|| format_number(black_box(1234567.0), DEFAULT_MAX_LENGTH))
    });
}

fn bench_format_fraction(c: &mut Criterion) {
    c.bench_function("format_number_long_fraction", |b| {
        b.iter(|| format_number(black_box(123456789012.34567), DEFAULT_MAX_LENGTH))
    });
}

fn bench_key_sequence(c: &mut Criterion) {
    let sequence = [
        Input::Digit(1),
        Input::Digit(2),
        Input::Decimal,
        Input::Digit(5),
        Input::Operator(Operator::Multiply),
        Input::Digit(3),
        Input::Operator(Operator::Power),
        Input::Digit(2),
        Input::Equals,
        Input::SquareRoot,
        Input::Clear,
    ];

    c.bench_function("engine_key_sequence", |b| {
        b.iter(|| {
            let mut engine = CalculatorEngine::default();
            for input in sequence.iter() {
                engine.handle(black_box(*input));
            }
            engine
        })
    });
}

criterion_group!(
    benches,
    bench_format_integer,
    bench_format_fraction,
    bench_key_sequence
);
criterion_main!(benches);
