//! Black-Scholes-Merton pricing model and Greeks calculation.
//!
//! Closed-form price, delta, gamma, vega, theta and rho for European options
//! on an underlying paying a continuous dividend yield.

use super::distribution::{norm_cdf, norm_pdf};
use super::error::PricingError;
use super::types::{GreeksResult, ModelParameters, OptionType};
use tracing::trace;

/// Black-Scholes pricing model implementation.
///
/// Stateless: every method is a pure function of its arguments. No input
/// validation happens here; a zero volatility or time, or a non-positive
/// spot or strike, yields NaN or infinite outputs.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r − q + σ²/2)T] / (σ√T)
    #[must_use]
    pub fn d1(params: &ModelParameters) -> f64 {
        let vol = params.volatility;
        let time = params.time_to_expiry;
        ((params.spot / params.strike).ln()
            + (params.rate - params.dividend_yield + 0.5 * vol * vol) * time)
            / (vol * time.sqrt())
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 − σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// Calculates the theoretical option price only.
    ///
    /// For calls: C = S·e^(−qT)·N(d1) − K·e^(−rT)·N(d2)
    /// For puts:  P = K·e^(−rT)·N(−d2) − S·e^(−qT)·N(−d1)
    #[must_use]
    pub fn price(params: &ModelParameters) -> f64 {
        let d1 = Self::d1(params);
        let d2 = Self::d2(d1, params.volatility, params.time_to_expiry);
        let spot_discounted = params.spot * (-params.dividend_yield * params.time_to_expiry).exp();
        let strike_discounted = params.strike * (-params.rate * params.time_to_expiry).exp();

        match params.option_type {
            OptionType::Call => spot_discounted * norm_cdf(d1) - strike_discounted * norm_cdf(d2),
            OptionType::Put => strike_discounted * norm_cdf(-d2) - spot_discounted * norm_cdf(-d1),
        }
    }

    /// Calculates the price together with all five Greeks.
    ///
    /// Theta is annualized. Call rho is `e^(−qT)·N(d2)`, without the `K·T`
    /// factor that the put branch and the textbook formula carry.
    #[must_use]
    pub fn price_and_greeks(params: &ModelParameters) -> GreeksResult {
        let ModelParameters {
            spot,
            strike,
            rate,
            volatility: vol,
            time_to_expiry: time,
            dividend_yield: div,
            option_type,
        } = *params;

        let sqrt_time = time.sqrt();
        let d1 = Self::d1(params);
        let d2 = Self::d2(d1, vol, time);
        trace!("d1: {}, d2: {}", d1, d2);

        let div_discount = (-div * time).exp();
        let rate_discount = (-rate * time).exp();
        let pdf_d1 = norm_pdf(d1);

        // Time decay from the volatility term, shared by both branches.
        let decay = -spot * div_discount * pdf_d1 * vol / (2.0 * sqrt_time);

        let (price, delta, theta, rho) = match option_type {
            OptionType::Call => {
                let cdf_d1 = norm_cdf(d1);
                let cdf_d2 = norm_cdf(d2);
                (
                    spot * div_discount * cdf_d1 - strike * rate_discount * cdf_d2,
                    div_discount * cdf_d1,
                    decay - rate * strike * rate_discount * cdf_d2
                        + div * spot * div_discount * cdf_d1,
                    div_discount * cdf_d2,
                )
            }
            OptionType::Put => {
                let cdf_minus_d1 = norm_cdf(-d1);
                let cdf_minus_d2 = norm_cdf(-d2);
                (
                    strike * rate_discount * cdf_minus_d2 - spot * div_discount * cdf_minus_d1,
                    div_discount * (norm_cdf(d1) - 1.0),
                    decay + rate * strike * rate_discount * cdf_minus_d2
                        - div * spot * div_discount * cdf_minus_d1,
                    -strike * time * rate_discount * cdf_minus_d2,
                )
            }
        };

        let greeks = GreeksResult {
            price,
            delta,
            gamma: div_discount * pdf_d1 / (spot * vol * sqrt_time),
            vega: spot * div_discount * pdf_d1 * sqrt_time,
            theta,
            rho,
        };
        trace!("{} greeks: {:?}", option_type, greeks);
        greeks
    }
}

/// Prices an option and its Greeks from raw scalar inputs.
///
/// `option_type` is matched case-insensitively against "call" and "put".
///
/// # Errors
/// `PricingError::InvalidArgument` when `option_type` is neither literal.
///
/// # Example
/// ```
/// use blackscholes_rs::pricing::price_and_greeks;
///
/// let greeks = price_and_greeks(100.0, 100.0, 0.01, 0.20, 1.0, "call", 0.0).unwrap();
/// assert!((greeks.price - 8.4333).abs() < 1e-4);
/// assert!(price_and_greeks(100.0, 100.0, 0.01, 0.20, 1.0, "straddle", 0.0).is_err());
/// ```
pub fn price_and_greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    time_to_expiry: f64,
    option_type: &str,
    dividend_yield: f64,
) -> Result<GreeksResult, PricingError> {
    let option_type = option_type.parse::<OptionType>()?;
    let params = ModelParameters::new(
        spot,
        strike,
        rate,
        volatility,
        time_to_expiry,
        dividend_yield,
        option_type,
    );
    Ok(BlackScholes::price_and_greeks(&params))
}
