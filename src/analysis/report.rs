//! Pricing report assembled from dashboard inputs.

use super::config::{ConfigError, DashboardInputs};
use super::sweeps::{
    CURVE_POINTS, CurvePoint, PAYOFF_POINTS, PriceSurface, SURFACE_POINTS, payoff_at_expiry,
    price_surface, price_vs_spot, price_vs_volatility,
};
use crate::pricing::{
    BlackScholes, GreeksResult, ModelParameters, Moneyness, solve_implied_volatility,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Outcome of the implied volatility part of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "volatility", rename_all = "snake_case")]
pub enum ImpliedVolatilityStatus {
    /// No market price was entered.
    NotRequested,
    /// Implied volatility as an annualized decimal.
    Estimated(f64),
    /// No volatility in the search interval reproduces the market price.
    NotFound,
}

impl ImpliedVolatilityStatus {
    /// The estimated volatility, if any.
    #[must_use]
    pub fn volatility(&self) -> Option<f64> {
        match self {
            ImpliedVolatilityStatus::Estimated(vol) => Some(*vol),
            _ => None,
        }
    }
}

impl fmt::Display for ImpliedVolatilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpliedVolatilityStatus::NotRequested => {
                write!(f, "Enter a market price to estimate implied volatility.")
            }
            ImpliedVolatilityStatus::Estimated(vol) => {
                write!(f, "Estimated implied volatility: {:.4}%", vol * 100.0)
            }
            ImpliedVolatilityStatus::NotFound => {
                write!(f, "Implied volatility could not be calculated.")
            }
        }
    }
}

/// Price, Greeks and implied volatility for one set of dashboard inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    /// Model parameters in decimal units.
    pub parameters: ModelParameters,
    /// Spot against strike.
    pub moneyness: Moneyness,
    /// Price and Greeks at the input volatility.
    pub greeks: GreeksResult,
    /// Implied volatility from the entered market price.
    pub implied_volatility: ImpliedVolatilityStatus,
}

impl PricingReport {
    /// Prices the inputs and, when a market price is given, solves for
    /// implied volatility.
    ///
    /// # Errors
    /// `ConfigError::Invalid` for an unknown option type or non-positive
    /// spot, strike, volatility or time.
    pub fn build(inputs: &DashboardInputs) -> Result<Self, ConfigError> {
        let parameters = inputs.to_model_parameters()?;
        let greeks = BlackScholes::price_and_greeks(&parameters);

        let implied_volatility = match inputs.implied_volatility_query()? {
            None => ImpliedVolatilityStatus::NotRequested,
            Some(query) => match solve_implied_volatility(&query) {
                Some(vol) => ImpliedVolatilityStatus::Estimated(vol),
                None => {
                    warn!(
                        "implied volatility not found for market price {}",
                        query.market_price
                    );
                    ImpliedVolatilityStatus::NotFound
                }
            },
        };
        debug!("report price {:.6}, {}", greeks.price, implied_volatility);

        Ok(Self {
            moneyness: parameters.moneyness(),
            parameters,
            greeks,
            implied_volatility,
        })
    }
}

/// Chart series for one set of model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Payoff at expiration against spot.
    pub payoff: Vec<CurvePoint>,
    /// Theoretical price against spot.
    pub price_vs_spot: Vec<CurvePoint>,
    /// Theoretical price against volatility.
    pub price_vs_volatility: Vec<CurvePoint>,
    /// Theoretical price over spot × volatility.
    pub surface: PriceSurface,
}

impl ChartData {
    /// Builds every series with the standard grid sizes.
    #[must_use]
    pub fn build(parameters: &ModelParameters) -> Self {
        Self {
            payoff: payoff_at_expiry(parameters, PAYOFF_POINTS),
            price_vs_spot: price_vs_spot(parameters, CURVE_POINTS),
            price_vs_volatility: price_vs_volatility(parameters, CURVE_POINTS),
            surface: price_surface(parameters, SURFACE_POINTS, SURFACE_POINTS),
        }
    }
}
