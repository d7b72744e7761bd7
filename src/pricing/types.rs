//! Value types shared by the pricer and the implied volatility solver.

use super::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default convergence tolerance on the volatility returned by the solver.
pub const DEFAULT_IV_TOLERANCE: f64 = 1e-6;

/// Position of spot relative to strike for a given option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Moneyness {
    /// Positive intrinsic value.
    InTheMoney,
    /// Spot within 0.1% of strike.
    AtTheMoney,
    /// No intrinsic value.
    OutOfTheMoney,
}

/// European option type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    #[default]
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl OptionType {
    /// Lowercase literal used by [`FromStr`] and [`fmt::Display`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("call") {
            Ok(OptionType::Call)
        } else if s.eq_ignore_ascii_case("put") {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::InvalidArgument {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Black-Scholes model inputs for a single European option.
///
/// Rates and volatility are annualized decimals (0.05 = 5%), time is in years.
/// The formulas are only defined for `spot`, `strike`, `volatility` and
/// `time_to_expiry` strictly positive; the pricer does not check this, call
/// [`ModelParameters::validate`] first if the inputs are untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualized volatility (σ).
    pub volatility: f64,
    /// Time to expiration in years (T).
    pub time_to_expiry: f64,
    /// Continuously compounded dividend yield (q).
    pub dividend_yield: f64,
    /// Call or Put.
    pub option_type: OptionType,
}

impl ModelParameters {
    /// Creates new model parameters.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price
    /// - `strike`: Option strike price
    /// - `rate`: Risk-free interest rate (annualized)
    /// - `volatility`: Volatility (annualized)
    /// - `time_to_expiry`: Time to expiration in years
    /// - `dividend_yield`: Dividend yield (annualized)
    /// - `option_type`: Call or Put
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_expiry: f64,
        dividend_yield: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            time_to_expiry,
            dividend_yield,
            option_type,
        }
    }

    /// Creates parameters for a call option with no dividend yield.
    #[must_use]
    pub fn call(spot: f64, strike: f64, rate: f64, volatility: f64, time_to_expiry: f64) -> Self {
        Self::new(
            spot,
            strike,
            rate,
            volatility,
            time_to_expiry,
            0.0,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option with no dividend yield.
    #[must_use]
    pub fn put(spot: f64, strike: f64, rate: f64, volatility: f64, time_to_expiry: f64) -> Self {
        Self::new(
            spot,
            strike,
            rate,
            volatility,
            time_to_expiry,
            0.0,
            OptionType::Put,
        )
    }

    /// Sets the dividend yield.
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Sets the volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the spot price.
    #[must_use]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the option type.
    #[must_use]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Calculates the intrinsic value of the option.
    ///
    /// For calls: max(0, spot - strike)
    /// For puts: max(0, strike - spot)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Returns true if the option is in-the-money.
    #[must_use]
    pub fn is_itm(&self) -> bool {
        self.intrinsic_value() > 0.0
    }

    /// Returns true if the option is at-the-money (within 0.1% of strike).
    #[must_use]
    pub fn is_atm(&self) -> bool {
        (self.spot - self.strike).abs() / self.strike < 0.001
    }

    /// Classifies the option by spot against strike.
    ///
    /// At-the-money takes precedence, so a call 0.05% above strike is
    /// `AtTheMoney` even though it has a small intrinsic value.
    #[must_use]
    pub fn moneyness(&self) -> Moneyness {
        if self.is_atm() {
            Moneyness::AtTheMoney
        } else if self.is_itm() {
            Moneyness::InTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }

    /// Checks the positivity constraints the closed-form formulas rely on.
    ///
    /// # Errors
    /// `PricingError::InvalidParams` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        let checks = [
            ("spot price", self.spot),
            ("strike price", self.strike),
            ("volatility", self.volatility),
            ("time to expiry", self.time_to_expiry),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricingError::InvalidParams {
                    message: format!("{name} must be positive, got {value}"),
                });
            }
        }
        if !self.rate.is_finite() || !self.dividend_yield.is_finite() {
            return Err(PricingError::InvalidParams {
                message: format!(
                    "rates must be finite, got r={} q={}",
                    self.rate, self.dividend_yield
                ),
            });
        }
        Ok(())
    }
}

/// Price and first-order risk sensitivities of one option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    /// Theoretical option price.
    pub price: f64,
    /// Sensitivity to the underlying price.
    pub delta: f64,
    /// Sensitivity of delta to the underlying price.
    pub gamma: f64,
    /// Sensitivity to volatility, per unit (not per 1%) change in σ.
    pub vega: f64,
    /// Annualized time decay.
    pub theta: f64,
    /// Sensitivity to the risk-free rate.
    pub rho: f64,
}

impl GreeksResult {
    /// Returns true when every field is a finite number.
    ///
    /// Degenerate inputs (zero volatility, zero time, non-positive prices)
    /// surface here as NaN or infinity.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.price, self.delta, self.gamma, self.vega, self.theta, self.rho,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Input of an implied volatility solve.
///
/// Carries every model parameter except the volatility, which is the unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatilityQuery {
    /// Observed market price of the option.
    pub market_price: f64,
    /// Underlying spot price.
    pub spot: f64,
    /// Option strike price.
    pub strike: f64,
    /// Risk-free interest rate (annualized).
    pub rate: f64,
    /// Time to expiration in years.
    pub time_to_expiry: f64,
    /// Call or Put.
    pub option_type: OptionType,
    /// Dividend yield (annualized).
    pub dividend_yield: f64,
    /// Convergence tolerance on the returned volatility.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_IV_TOLERANCE
}

impl ImpliedVolatilityQuery {
    /// Creates a query with the default tolerance.
    #[must_use]
    pub fn new(
        market_price: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        time_to_expiry: f64,
        option_type: OptionType,
        dividend_yield: f64,
    ) -> Self {
        Self {
            market_price,
            spot,
            strike,
            rate,
            time_to_expiry,
            option_type,
            dividend_yield,
            tolerance: DEFAULT_IV_TOLERANCE,
        }
    }

    /// Builds a query from model parameters, ignoring their volatility.
    #[must_use]
    pub fn from_params(params: &ModelParameters, market_price: f64) -> Self {
        Self::new(
            market_price,
            params.spot,
            params.strike,
            params.rate,
            params.time_to_expiry,
            params.option_type,
            params.dividend_yield,
        )
    }

    /// Overrides the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Model parameters for a candidate volatility.
    #[must_use]
    pub fn params_at(&self, volatility: f64) -> ModelParameters {
        ModelParameters::new(
            self.spot,
            self.strike,
            self.rate,
            volatility,
            self.time_to_expiry,
            self.dividend_yield,
            self.option_type,
        )
    }
}

/// Detailed outcome of a successful implied volatility solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatilityResult {
    /// Implied volatility (annualized decimal, e.g. 0.25 = 25%).
    pub volatility: f64,
    /// Number of root finder iterations.
    pub iterations: u32,
    /// Model price at `volatility` minus the market price.
    pub price_error: f64,
}

impl ImpliedVolatilityResult {
    /// Returns the IV as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn volatility_percent(&self) -> f64 {
        self.volatility * 100.0
    }
}
