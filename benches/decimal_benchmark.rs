// ============================================================================
// Scaled Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiply-Divide - Exact path, gcd reduction and the wide fallback
// 2. Typed Arithmetic - FixedDecimal operators against rust_decimal
// 3. Rounding Policies - Integer division under each policy
// 4. Text - Parsing and formatting
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use scaled_decimal::prelude::*;
use std::hint::black_box;

// ============================================================================
// Multiply-Divide Benchmarks
// ============================================================================

fn benchmark_mul_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_div");

    let cases = [
        ("small", 1_999, 1_075, 1_000),
        ("wide_product", 4_000_000_000_000_000_000, 3_000_000_000_000_000_000, 2_000_000_000_000_000_000),
        ("gcd_reduced", 500_000_000_000_000_000, 400_000_000_000_000_000, 1_000_000_000_000_000_000),
        ("lossy_fallback", 999_999_999_999_999_999, 999_999_999_999_999_999, 1_000_000_000_000_000_000),
    ];

    for (name, a, b, d) in cases {
        group.bench_with_input(BenchmarkId::new("nearest", name), &(a, b, d), |bench, &(a, b, d)| {
            bench.iter(|| black_box(mul_div::<Nearest>(black_box(a), black_box(b), black_box(d))));
        });
    }

    group.finish();
}

// ============================================================================
// Typed Arithmetic Benchmarks
// ============================================================================

fn benchmark_fixed_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_arithmetic");

    let price: FixedDecimal<4> = "1234.5678".parse().unwrap();
    let qty: FixedDecimal<4> = "0.0375".parse().unwrap();

    group.bench_function("add", |b| b.iter(|| black_box(black_box(price) + black_box(qty))));
    group.bench_function("mul", |b| b.iter(|| black_box(black_box(price) * black_box(qty))));
    group.bench_function("div", |b| b.iter(|| black_box(black_box(price) / black_box(qty))));

    let rate: FixedDecimal<9> = "1.084213377".parse().unwrap();
    group.bench_function("mul_mixed_precision", |b| {
        b.iter(|| black_box(black_box(price) * black_box(rate)))
    });

    // Same operations on the 96-bit decimal for comparison
    let price_d: Decimal = "1234.5678".parse().unwrap();
    let qty_d: Decimal = "0.0375".parse().unwrap();
    group.bench_function("rust_decimal_mul", |b| {
        b.iter(|| black_box(black_box(price_d) * black_box(qty_d)).round_dp(4))
    });
    group.bench_function("rust_decimal_div", |b| {
        b.iter(|| black_box(black_box(price_d) / black_box(qty_d)).round_dp(4))
    });

    group.finish();
}

fn benchmark_dyn_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dyn_arithmetic");

    let a: DynDecimal = "1234.5678".parse().unwrap();
    let b: DynDecimal = "0.03".parse().unwrap();

    group.bench_function("add_mixed", |bench| bench.iter(|| black_box(black_box(a) + black_box(b))));
    group.bench_function("mul_mixed", |bench| bench.iter(|| black_box(black_box(a) * black_box(b))));
    group.bench_function("compare", |bench| bench.iter(|| black_box(black_box(a) > black_box(b))));

    group.finish();
}

// ============================================================================
// Rounding Policy Benchmarks
// ============================================================================

fn benchmark_rounding_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rounded");

    for mode in RoundingMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode.name()), &mode, |b, &mode| {
            b.iter(|| black_box(mode.div_rounded(black_box(-1_234_567_891), black_box(1_000))));
        });
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for input in ["42", "-1234.5678", "92233720368.54775807"] {
        group.bench_with_input(BenchmarkId::new("parse", input), input, |b, input| {
            b.iter(|| black_box(input.parse::<DynDecimal>()));
        });
    }

    let locale = NumericLocale::new(',').with_grouping('.');
    group.bench_function("parse_with_locale", |b| {
        b.iter(|| black_box(DynDecimal::<Nearest>::parse_with(black_box("1.234.567,891"), 2, &locale)))
    });

    let money: Money = "-98765.43".parse().unwrap();
    group.bench_function("format", |b| b.iter(|| black_box(black_box(money).format_with(&NumericLocale::C))));
    group.bench_function("to_string", |b| b.iter(|| black_box(black_box(money).to_string())));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mul_div,
    benchmark_fixed_arithmetic,
    benchmark_dyn_arithmetic,
    benchmark_rounding_policies,
    benchmark_text,
);
criterion_main!(benches);
