//! Black-Scholes pricing and implied volatility.
//!
//! This module prices European options in closed form under the
//! Black-Scholes-Merton model with a continuous dividend yield, and inverts
//! the model to recover implied volatility from an observed market price.
//!
//! # Pricing
//!
//! [`price_and_greeks`] takes the seven scalar inputs and returns the price
//! together with delta, gamma, vega, theta (annualized) and rho. The option
//! type literal is matched case-insensitively; anything other than "call" or
//! "put" fails with [`PricingError::InvalidArgument`]. Inputs are otherwise
//! taken as given: zero volatility or time, or non-positive prices, produce
//! NaN/infinite Greeks (see [`GreeksResult::is_finite`]).
//!
//! # Implied Volatility
//!
//! There is no analytical inverse of Black-Scholes, so
//! [`solve_implied_volatility`] brackets the root of
//! `price(σ) − market_price` on `(1e-6, 5.0)` with Brent's method. A market
//! price outside the attainable range yields `None`, never a number.
//!
//! # Example
//!
//! ```
//! use blackscholes_rs::pricing::{
//!     ImpliedVolatilityQuery, OptionType, price_and_greeks, solve_implied_volatility,
//! };
//!
//! let greeks = price_and_greeks(100.0, 100.0, 0.01, 0.20, 1.0, "call", 0.0)?;
//!
//! let query = ImpliedVolatilityQuery::new(
//!     greeks.price, 100.0, 100.0, 0.01, 1.0, OptionType::Call, 0.0,
//! );
//! let iv = solve_implied_volatility(&query).expect("price is attainable");
//! assert!((iv - 0.20).abs() < 1e-4);
//! # Ok::<(), blackscholes_rs::pricing::PricingError>(())
//! ```

mod black_scholes;
mod brent;
mod distribution;
mod error;
mod solver;
mod types;

pub use black_scholes::{BlackScholes, price_and_greeks};
pub use brent::BrentSolver;
pub use distribution::{norm_cdf, norm_pdf};
pub use error::{IVError, PricingError, RootError};
pub use solver::{
    MAX_VOLATILITY, MIN_VOLATILITY, SolverConfig, solve_implied_volatility, solve_iv,
};
pub use types::{
    DEFAULT_IV_TOLERANCE, GreeksResult, ImpliedVolatilityQuery, ImpliedVolatilityResult,
    ModelParameters, Moneyness, OptionType,
};
