//! Dashboard-level analysis built on the pricing core.
//!
//! [`DashboardInputs`] holds user-facing inputs with rates and volatility in
//! percent. [`PricingReport`] turns them into a price, Greeks and an implied
//! volatility status, while [`ChartData`] carries the payoff, price curves and
//! price surface used for plotting.

pub mod config;
/// Report assembly and the implied volatility status shown to users.
pub mod report;
pub mod sweeps;

pub use config::{ConfigError, DashboardInputs};
pub use report::{ChartData, ImpliedVolatilityStatus, PricingReport};
pub use sweeps::{
    CURVE_POINTS, CurvePoint, PAYOFF_POINTS, PriceSurface, SURFACE_POINTS, linspace,
    payoff_at_expiry, price_surface, price_vs_spot, price_vs_volatility,
};
