//! # blackscholes-rs
//!
//! European option pricing under the Black-Scholes-Merton model with a
//! continuous dividend yield.
//!
//! ## Features
//!
//! - **Closed-form pricing**: price, delta, gamma, vega, theta and rho in a
//!   single evaluation.
//! - **Implied volatility**: Brent root-finding on `(1e-6, 5.0)`, returning
//!   `None` when the market price is outside the attainable range.
//! - **Dashboard analysis**: percent-based inputs, pricing reports, payoff
//!   curves and price surfaces, all serializable with `serde`.
//! - **Tracing**: solver progress is reported through `tracing` at `debug`
//!   and `trace` level.
//!
//! ## Quick Start
//!
//! ```
//! use blackscholes_rs::prelude::*;
//!
//! let params = ModelParameters::call(100.0, 100.0, 0.01, 0.20, 1.0);
//! let greeks = BlackScholes::price_and_greeks(&params);
//! assert!((greeks.price - 8.4333).abs() < 1e-4);
//!
//! let query = ImpliedVolatilityQuery::from_params(&params, greeks.price);
//! let iv = solve_implied_volatility(&query);
//! assert!(iv.is_some_and(|v| (v - 0.20).abs() < 1e-4));
//! ```
//!
//! ## Units
//!
//! The pricing core takes decimals: `0.05` is 5%. Time is in years. Theta is
//! per year, vega and rho are per unit change in volatility and rate.
//! [`analysis::DashboardInputs`] accepts percent values and converts them.

pub mod analysis;
pub mod pricing;

/// Convenient re-exports of the most used types and functions.
pub mod prelude;
