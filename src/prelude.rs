pub use crate::analysis::{
    ChartData, ConfigError, CurvePoint, DashboardInputs, ImpliedVolatilityStatus, PriceSurface,
    PricingReport,
};
pub use crate::pricing::{
    BlackScholes, BrentSolver, DEFAULT_IV_TOLERANCE, GreeksResult, IVError,
    ImpliedVolatilityQuery, ImpliedVolatilityResult, MAX_VOLATILITY, MIN_VOLATILITY,
    ModelParameters, Moneyness, OptionType, PricingError, RootError, SolverConfig, price_and_greeks,
    solve_implied_volatility, solve_iv,
};
