//! Dashboard input configuration.
//!
//! Inputs are expressed the way a user types them: rates, dividend yield and
//! volatility in percent. [`DashboardInputs::default`] carries the values a
//! fresh dashboard session starts from.

use crate::pricing::{
    DEFAULT_IV_TOLERANCE, ImpliedVolatilityQuery, ModelParameters, OptionType, PricingError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Errors raised while loading or interpreting dashboard inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The input file could not be read.
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// The input is not valid JSON for [`DashboardInputs`].
    Parse {
        /// Underlying error message.
        message: String,
    },

    /// The inputs are well-formed but cannot be priced.
    Invalid(PricingError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read inputs from {path}: {message}")
            }
            ConfigError::Parse { message } => {
                write!(f, "failed to parse inputs: {message}")
            }
            ConfigError::Invalid(err) => write!(f, "configuration error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PricingError> for ConfigError {
    fn from(err: PricingError) -> Self {
        ConfigError::Invalid(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// User-facing pricing inputs.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInputs {
    /// Underlying price (S).
    pub spot: f64,
    /// Strike (K).
    pub strike: f64,
    /// Risk-free rate in percent.
    pub rate_pct: f64,
    /// Volatility in percent.
    pub volatility_pct: f64,
    /// Time to maturity in years.
    pub time_to_expiry: f64,
    /// Dividend yield in percent.
    pub dividend_yield_pct: f64,
    /// "call" or "put", any case.
    pub option_type: String,
    /// Observed market price; zero or less means no implied volatility is requested.
    pub market_price: f64,
    /// Convergence tolerance for the implied volatility.
    pub iv_tolerance: f64,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate_pct: 1.0,
            volatility_pct: 20.0,
            time_to_expiry: 1.0,
            dividend_yield_pct: 0.0,
            option_type: OptionType::Call.to_string(),
            market_price: 0.0,
            iv_tolerance: DEFAULT_IV_TOLERANCE,
        }
    }
}

impl DashboardInputs {
    /// Parses inputs from a JSON document.
    ///
    /// # Errors
    /// `ConfigError::Parse` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads inputs from a JSON file.
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if
    /// its content is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("loaded dashboard inputs from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Parsed option type.
    ///
    /// # Errors
    /// `ConfigError::Invalid` wrapping `PricingError::InvalidArgument`.
    pub fn option_type(&self) -> Result<OptionType, ConfigError> {
        Ok(self.option_type.parse::<OptionType>()?)
    }

    /// Converts the percent inputs to model parameters and validates them.
    ///
    /// # Errors
    /// `ConfigError::Invalid` for an unknown option type or non-positive
    /// spot, strike, volatility or time.
    pub fn to_model_parameters(&self) -> Result<ModelParameters, ConfigError> {
        let params = ModelParameters::new(
            self.spot,
            self.strike,
            self.rate_pct / 100.0,
            self.volatility_pct / 100.0,
            self.time_to_expiry,
            self.dividend_yield_pct / 100.0,
            self.option_type()?,
        );
        params.validate()?;
        Ok(params)
    }

    /// Builds the implied volatility query, if a market price was entered.
    ///
    /// # Errors
    /// Same as [`DashboardInputs::to_model_parameters`].
    pub fn implied_volatility_query(&self) -> Result<Option<ImpliedVolatilityQuery>, ConfigError> {
        let params = self.to_model_parameters()?;
        if self.market_price > 0.0 {
            Ok(Some(
                ImpliedVolatilityQuery::from_params(&params, self.market_price)
                    .with_tolerance(self.iv_tolerance),
            ))
        } else {
            Ok(None)
        }
    }
}
