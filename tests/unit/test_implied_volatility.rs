use blackscholes_rs::prelude::*;

#[test]
fn test_reference_round_trip() {
    let query =
        ImpliedVolatilityQuery::new(8.433318, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
    let iv = solve_implied_volatility(&query).unwrap();
    assert!((iv - 0.20).abs() < 1e-4, "got {iv}");
}

#[test]
fn test_put_round_trip_with_dividend() {
    let params = ModelParameters::put(100.0, 105.0, 0.03, 0.30, 0.5).with_dividend_yield(0.01);
    let price = BlackScholes::price(&params);
    let query = ImpliedVolatilityQuery::from_params(&params, price);

    let result = solve_iv(&query, &SolverConfig::default()).unwrap();
    assert!((result.volatility - 0.30).abs() < 1e-5);
    assert!(result.price_error.abs() < 1e-3);
    assert!(result.iterations <= 100);
    assert!((result.volatility_percent() - 30.0).abs() < 1e-3);
}

#[test]
fn test_unreachable_price_is_none() {
    let query = ImpliedVolatilityQuery::new(1e9, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
    assert_eq!(solve_implied_volatility(&query), None);

    let err = solve_iv(&query, &SolverConfig::default()).unwrap_err();
    assert!(err.is_not_found());
    match err {
        IVError::NotFound {
            market_price,
            min_price,
            max_price,
        } => {
            assert_eq!(market_price, 1e9);
            assert!(min_price < max_price);
            assert!(max_price < 100.0);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_price_below_intrinsic_floor_is_none() {
    // At σ = 1e-6 this call is still worth about 0.995.
    let query = ImpliedVolatilityQuery::new(0.5, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
    assert!(solve_implied_volatility(&query).is_none());
}

#[test]
fn test_non_positive_market_price() {
    for price in [0.0, -1.0, f64::NAN] {
        let query =
            ImpliedVolatilityQuery::new(price, 100.0, 100.0, 0.01, 1.0, OptionType::Put, 0.0);
        assert!(solve_implied_volatility(&query).is_none());
        assert!(matches!(
            solve_iv(&query, &SolverConfig::default()),
            Err(IVError::InvalidParams { .. })
        ));
    }
}

#[test]
fn test_looser_tolerance_still_close() {
    let query = ImpliedVolatilityQuery::new(8.433318, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0)
        .with_tolerance(1e-3);
    let iv = solve_implied_volatility(&query).unwrap();
    assert!((iv - 0.20).abs() < 2e-3);
}

#[test]
fn test_high_volatility_round_trip() {
    let params = ModelParameters::call(100.0, 120.0, 0.02, 2.5, 1.0);
    let query = ImpliedVolatilityQuery::from_params(&params, BlackScholes::price(&params));
    let iv = solve_implied_volatility(&query).unwrap();
    assert!((iv - 2.5).abs() < 1e-4);
}

#[test]
fn test_brent_solver_directly() {
    let solver = BrentSolver::new(1e-12, 100);
    let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
    assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);

    assert!(matches!(
        solver.find_root(|x| x * x + 1.0, -1.0, 1.0),
        Err(RootError::NoBracket { .. })
    ));
}
