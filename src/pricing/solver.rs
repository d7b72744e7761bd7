//! Brent solver for implied volatility calculation.
//!
//! This module finds the volatility that makes the Black-Scholes price equal
//! to the observed market price, by bracketing the root of
//! `f(σ) = price(σ) − market_price` over a fixed volatility interval.

use super::black_scholes::BlackScholes;
use super::brent::BrentSolver;
use super::error::{IVError, RootError};
use super::types::{ImpliedVolatilityQuery, ImpliedVolatilityResult};
use tracing::debug;

/// Lower end of the volatility search interval (0.0001%).
pub const MIN_VOLATILITY: f64 = 1e-6;

/// Upper end of the volatility search interval (500%).
pub const MAX_VOLATILITY: f64 = 5.0;

/// Configuration for the implied volatility solver.
///
/// The convergence tolerance is not part of the configuration: it travels
/// with each [`ImpliedVolatilityQuery`].
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum root finder iterations before giving up.
    pub max_iterations: u32,
    /// Minimum IV bound (default: 1e-6).
    pub min_iv: f64,
    /// Maximum IV bound (default: 5.0 = 500%).
    pub max_iv: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            min_iv: MIN_VOLATILITY,
            max_iv: MAX_VOLATILITY,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the IV bounds.
    #[must_use]
    pub fn with_bounds(mut self, min_iv: f64, max_iv: f64) -> Self {
        self.min_iv = min_iv;
        self.max_iv = max_iv;
        self
    }
}

/// Validates the solver-specific inputs of a query.
///
/// Model parameters are not checked here. Degenerate ones make the
/// objective NaN at the bracket ends and end up as `IVError::NotFound`.
fn validate_query(query: &ImpliedVolatilityQuery) -> Result<(), IVError> {
    if !(query.market_price.is_finite() && query.market_price > 0.0) {
        return Err(IVError::InvalidParams {
            message: format!(
                "market price must be positive, got {}",
                query.market_price
            ),
        });
    }

    if !(query.tolerance.is_finite() && query.tolerance > 0.0) {
        return Err(IVError::InvalidParams {
            message: format!("tolerance must be positive, got {}", query.tolerance),
        });
    }

    Ok(())
}

/// Solves for implied volatility using Brent's method.
///
/// # Arguments
/// - `query`: Market price, option parameters and tolerance
/// - `config`: Search interval and iteration limit
///
/// # Returns
/// - `Ok(ImpliedVolatilityResult)`: Converged IV, iterations and residual
/// - `Err(IVError::NotFound)`: No volatility in the interval reproduces the price
/// - `Err(IVError::InvalidParams)`: Non-positive market price or tolerance
/// - `Err(IVError::ConvergenceFailure)`: Iteration limit reached
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::{ImpliedVolatilityQuery, OptionType, SolverConfig, solve_iv};
///
/// let query = ImpliedVolatilityQuery::new(8.433318, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
/// let result = solve_iv(&query, &SolverConfig::default()).unwrap();
/// assert!((result.volatility - 0.20).abs() < 1e-4);
/// ```
pub fn solve_iv(
    query: &ImpliedVolatilityQuery,
    config: &SolverConfig,
) -> Result<ImpliedVolatilityResult, IVError> {
    validate_query(query)?;

    let objective = |vol: f64| BlackScholes::price(&query.params_at(vol)) - query.market_price;
    let solver = BrentSolver::new(query.tolerance, config.max_iterations);

    match solver.find_root_with_iterations(&objective, config.min_iv, config.max_iv) {
        Ok((volatility, iterations)) => {
            let price_error = objective(volatility);
            debug!(
                "implied volatility {:.6} for {} price {} after {} iterations",
                volatility, query.option_type, query.market_price, iterations
            );
            Ok(ImpliedVolatilityResult {
                volatility,
                iterations,
                price_error,
            })
        }
        Err(RootError::NoBracket { .. }) => {
            let min_price = BlackScholes::price(&query.params_at(config.min_iv));
            let max_price = BlackScholes::price(&query.params_at(config.max_iv));
            debug!(
                "no implied volatility for {} price {}: attainable range [{}, {}]",
                query.option_type, query.market_price, min_price, max_price
            );
            Err(IVError::NotFound {
                market_price: query.market_price,
                min_price,
                max_price,
            })
        }
        Err(RootError::MaxIterationsExceeded { iterations }) => {
            Err(IVError::ConvergenceFailure { iterations })
        }
    }
}

/// Finds the implied volatility for a query with the default search interval.
///
/// Returns `None` when no volatility in `(1e-6, 5.0)` reproduces the market
/// price. `None` is an expected outcome for out-of-range prices and must not
/// be read as a zero volatility. Invalid queries (non-positive market price
/// or tolerance) also yield `None`.
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::{ImpliedVolatilityQuery, OptionType, solve_implied_volatility};
///
/// let query = ImpliedVolatilityQuery::new(1e9, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0);
/// assert!(solve_implied_volatility(&query).is_none());
/// ```
#[must_use]
pub fn solve_implied_volatility(query: &ImpliedVolatilityQuery) -> Option<f64> {
    solve_iv(query, &SolverConfig::default())
        .map(|result| result.volatility)
        .ok()
}
