use blackscholes_rs::prelude::*;
use blackscholes_rs::analysis::{SURFACE_POINTS, price_surface};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");
    let call = ModelParameters::call(100.0, 100.0, 0.01, 0.20, 1.0);
    let put = ModelParameters::put(100.0, 105.0, 0.03, 0.30, 0.5).with_dividend_yield(0.01);

    group.bench_function("price_call", |b| {
        b.iter(|| BlackScholes::price(black_box(&call)))
    });
    group.bench_function("price_and_greeks_call", |b| {
        b.iter(|| BlackScholes::price_and_greeks(black_box(&call)))
    });
    group.bench_function("price_and_greeks_put", |b| {
        b.iter(|| BlackScholes::price_and_greeks(black_box(&put)))
    });
    group.bench_function("price_and_greeks_scalar", |b| {
        b.iter(|| {
            price_and_greeks(
                black_box(100.0),
                black_box(100.0),
                0.01,
                0.20,
                1.0,
                black_box("call"),
                0.0,
            )
        })
    });
    group.finish();
}

fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    let atm = ImpliedVolatilityQuery::new(8.433318, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
    group.bench_function("atm_call", |b| {
        b.iter(|| solve_implied_volatility(black_box(&atm)))
    });

    let otm_put = ModelParameters::put(100.0, 80.0, 0.02, 0.45, 0.25);
    let otm_query = ImpliedVolatilityQuery::from_params(&otm_put, BlackScholes::price(&otm_put));
    group.bench_function("otm_put", |b| {
        b.iter(|| solve_implied_volatility(black_box(&otm_query)))
    });

    let unreachable =
        ImpliedVolatilityQuery::new(1e9, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
    group.bench_function("not_found", |b| {
        b.iter(|| solve_implied_volatility(black_box(&unreachable)))
    });
    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let params = ModelParameters::call(100.0, 100.0, 0.01, 0.20, 1.0);
    c.bench_function("price_surface_30x30", |b| {
        b.iter(|| price_surface(black_box(&params), SURFACE_POINTS, SURFACE_POINTS))
    });
}

criterion_group!(
    benches,
    bench_pricing,
    bench_implied_volatility,
    bench_surface
);
criterion_main!(benches);
