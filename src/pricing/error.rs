//! Error types for pricing and implied volatility calculation.

use std::fmt;

/// Errors raised by the pricer and by parameter validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option type literal is neither "call" nor "put".
    InvalidArgument {
        /// The rejected literal.
        value: String,
    },

    /// Model parameters violate the positivity constraints.
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidArgument { value } => {
                write!(
                    f,
                    "invalid option type '{value}': use 'call' or 'put'"
                )
            }
            PricingError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Errors specific to IV calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum IVError {
    /// The market price cannot be reproduced by any volatility in the search
    /// interval: the objective has the same sign at both ends.
    NotFound {
        /// Observed market price.
        market_price: f64,
        /// Model price at the lower volatility bound.
        min_price: f64,
        /// Model price at the upper volatility bound.
        max_price: f64,
    },

    /// Root finder did not converge within max iterations.
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Invalid input parameters for IV calculation.
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },
}

impl IVError {
    /// Returns true for the expected "no volatility reproduces this price" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, IVError::NotFound { .. })
    }
}

impl fmt::Display for IVError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IVError::NotFound {
                market_price,
                min_price,
                max_price,
            } => {
                write!(
                    f,
                    "no implied volatility found: market price {market_price:.4} outside attainable range [{min_price:.4}, {max_price:.4}]"
                )
            }
            IVError::ConvergenceFailure { iterations } => {
                write!(f, "solver did not converge after {iterations} iterations")
            }
            IVError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
        }
    }
}

impl std::error::Error for IVError {}

/// Errors from the bracketing root finder.
#[derive(Debug, Clone, PartialEq)]
pub enum RootError {
    /// f(a) and f(b) have the same sign, or either is NaN.
    NoBracket {
        /// Left bracket endpoint.
        a: f64,
        /// Right bracket endpoint.
        b: f64,
    },

    /// Failed to converge within the iteration limit.
    MaxIterationsExceeded {
        /// Number of iterations attempted.
        iterations: u32,
    },
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootError::NoBracket { a, b } => {
                write!(f, "no bracket: f({a}) and f({b}) have the same sign")
            }
            RootError::MaxIterationsExceeded { iterations } => {
                write!(f, "failed to converge after {iterations} iterations")
            }
        }
    }
}

impl std::error::Error for RootError {}
