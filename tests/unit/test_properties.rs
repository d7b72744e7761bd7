use blackscholes_rs::prelude::*;
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = (f64, f64, f64, f64, f64, f64)> {
    (
        50.0..150.0_f64,
        50.0..150.0_f64,
        0.0..0.10_f64,
        0.05..1.0_f64,
        0.05..3.0_f64,
        0.0..0.05_f64,
    )
}

proptest! {
    #[test]
    fn put_call_parity_holds((s, k, r, vol, t, q) in params_strategy()) {
        let call = BlackScholes::price(&ModelParameters::call(s, k, r, vol, t).with_dividend_yield(q));
        let put = BlackScholes::price(&ModelParameters::put(s, k, r, vol, t).with_dividend_yield(q));
        let forward_gap = s * (-q * t).exp() - k * (-r * t).exp();
        prop_assert!((call - put - forward_gap).abs() < 1e-9);
    }

    #[test]
    fn gamma_and_vega_match_across_types((s, k, r, vol, t, q) in params_strategy()) {
        let call = BlackScholes::price_and_greeks(&ModelParameters::call(s, k, r, vol, t).with_dividend_yield(q));
        let put = BlackScholes::price_and_greeks(&ModelParameters::put(s, k, r, vol, t).with_dividend_yield(q));
        prop_assert!((call.gamma - put.gamma).abs() < 1e-12);
        prop_assert!((call.vega - put.vega).abs() < 1e-9);
        prop_assert!(call.gamma >= 0.0);
        prop_assert!(call.vega >= 0.0);
    }

    #[test]
    fn delta_is_bounded((s, k, r, vol, t, q) in params_strategy()) {
        let carry = (-q * t).exp();
        let call = BlackScholes::price_and_greeks(&ModelParameters::call(s, k, r, vol, t).with_dividend_yield(q));
        let put = BlackScholes::price_and_greeks(&ModelParameters::put(s, k, r, vol, t).with_dividend_yield(q));
        prop_assert!(call.delta >= 0.0 && call.delta <= carry + 1e-12);
        prop_assert!(put.delta <= 0.0 && put.delta >= -carry - 1e-12);
        prop_assert!((call.delta - put.delta - carry).abs() < 1e-12);
    }

    #[test]
    fn call_price_within_no_arbitrage_bounds((s, k, r, vol, t, q) in params_strategy()) {
        let call = BlackScholes::price(&ModelParameters::call(s, k, r, vol, t).with_dividend_yield(q));
        let discounted_spot = s * (-q * t).exp();
        let lower = (discounted_spot - k * (-r * t).exp()).max(0.0);
        prop_assert!(call >= lower - 1e-9);
        prop_assert!(call <= discounted_spot + 1e-9);
    }

    #[test]
    fn price_is_non_decreasing_in_volatility(
        (s, k, r, vol, t, q) in params_strategy(),
        bump in 0.001..0.5_f64,
    ) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let base = ModelParameters::new(s, k, r, vol, t, q, option_type);
            let lower = BlackScholes::price(&base);
            let higher = BlackScholes::price(&base.with_volatility(vol + bump));
            prop_assert!(higher >= lower - 1e-9, "{option_type}: {higher} < {lower}");
        }
    }

    #[test]
    fn price_is_monotone_in_spot(
        (s, k, r, vol, t, q) in params_strategy(),
        bump in 0.01..20.0_f64,
    ) {
        let call = ModelParameters::call(s, k, r, vol, t).with_dividend_yield(q);
        let call_low = BlackScholes::price(&call);
        let call_high = BlackScholes::price(&call.with_spot(s + bump));
        prop_assert!(call_high >= call_low - 1e-9, "call: {call_high} < {call_low}");

        let put = call.with_option_type(OptionType::Put);
        let put_low = BlackScholes::price(&put);
        let put_high = BlackScholes::price(&put.with_spot(s + bump));
        prop_assert!(put_high <= put_low + 1e-9, "put: {put_high} > {put_low}");
    }

    #[test]
    fn price_approaches_intrinsic_near_expiry(
        s in 50.0..150.0_f64,
        k in 50.0..150.0_f64,
        vol in 0.05..1.0_f64,
    ) {
        prop_assume!((s - k).abs() > 1.0);
        let call = ModelParameters::call(s, k, 0.01, vol, 1e-8);
        let put = call.with_option_type(OptionType::Put);
        prop_assert!((BlackScholes::price(&call) - (s - k).max(0.0)).abs() < 1e-3);
        prop_assert!((BlackScholes::price(&put) - (k - s).max(0.0)).abs() < 1e-3);
    }

    #[test]
    fn implied_volatility_recovers_input(
        s in 80.0..120.0_f64,
        k in 80.0..120.0_f64,
        r in 0.0..0.05_f64,
        vol in 0.05..1.5_f64,
        t in 0.1..2.0_f64,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let params = ModelParameters::new(s, k, r, vol, t, 0.0, option_type);
        let greeks = BlackScholes::price_and_greeks(&params);
        prop_assume!(greeks.vega > 1.0);

        let query = ImpliedVolatilityQuery::from_params(&params, greeks.price);
        let iv = solve_implied_volatility(&query);
        prop_assert!(iv.is_some());
        prop_assert!((iv.unwrap_or(f64::NAN) - vol).abs() < 1e-4);
    }
}
