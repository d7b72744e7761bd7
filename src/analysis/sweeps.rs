//! Parameter sweeps for charting.
//!
//! Each sweep varies one or two inputs of a base [`ModelParameters`] over an
//! evenly spaced grid and records the model price. The results are plain
//! serializable data; rendering them is left to the caller.

use crate::pricing::{BlackScholes, ModelParameters, OptionType};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Points in the payoff-at-expiry curve.
pub const PAYOFF_POINTS: usize = 100;

/// Points in the price-versus-spot and price-versus-volatility curves.
pub const CURVE_POINTS: usize = 50;

/// Points per axis of the price surface.
pub const SURFACE_POINTS: usize = 30;

/// Spot sweeps cover `[SPOT_RANGE.0 · S, SPOT_RANGE.1 · S]`.
pub const SPOT_RANGE: (f64, f64) = (0.5, 1.5);

/// Volatility range of the price-versus-volatility curve.
pub const CURVE_VOLATILITY_RANGE: (f64, f64) = (0.01, 1.0);

/// Volatility range of the price surface.
pub const SURFACE_VOLATILITY_RANGE: (f64, f64) = (0.05, 0.8);

/// One `(x, y)` sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Swept input value.
    pub x: f64,
    /// Resulting value.
    pub y: f64,
}

/// Option prices over a spot × volatility grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSurface {
    /// Spot axis.
    pub spots: Vec<f64>,
    /// Volatility axis.
    pub volatilities: Vec<f64>,
    /// `prices[i][j]` is the price at `volatilities[i]` and `spots[j]`.
    pub prices: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// Price at grid indices, if in range.
    #[must_use]
    pub fn price_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.prices.get(vol_index)?.get(spot_index).copied()
    }
}

/// Evenly spaced values from `start` to `end`, both included.
///
/// Returns an empty vector for `count == 0` and `[start]` for `count == 1`.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

fn spot_grid(params: &ModelParameters, count: usize) -> Vec<f64> {
    linspace(SPOT_RANGE.0 * params.spot, SPOT_RANGE.1 * params.spot, count)
}

/// Payoff at expiration across underlying prices around the current spot.
#[must_use]
pub fn payoff_at_expiry(params: &ModelParameters, count: usize) -> Vec<CurvePoint> {
    spot_grid(params, count)
        .into_iter()
        .map(|spot| {
            let payoff = match params.option_type {
                OptionType::Call => (spot - params.strike).max(0.0),
                OptionType::Put => (params.strike - spot).max(0.0),
            };
            CurvePoint { x: spot, y: payoff }
        })
        .collect()
}

/// Theoretical price across underlying prices around the current spot.
#[must_use]
pub fn price_vs_spot(params: &ModelParameters, count: usize) -> Vec<CurvePoint> {
    spot_grid(params, count)
        .into_iter()
        .map(|spot| CurvePoint {
            x: spot,
            y: BlackScholes::price(&params.with_spot(spot)),
        })
        .collect()
}

/// Theoretical price across volatilities in [`CURVE_VOLATILITY_RANGE`].
#[must_use]
pub fn price_vs_volatility(params: &ModelParameters, count: usize) -> Vec<CurvePoint> {
    let (low, high) = CURVE_VOLATILITY_RANGE;
    linspace(low, high, count)
        .into_iter()
        .map(|vol| CurvePoint {
            x: vol,
            y: BlackScholes::price(&params.with_volatility(vol)),
        })
        .collect()
}

/// Theoretical price over a spot × volatility grid.
#[must_use]
pub fn price_surface(params: &ModelParameters, spot_count: usize, vol_count: usize) -> PriceSurface {
    let spots = spot_grid(params, spot_count);
    let (low, high) = SURFACE_VOLATILITY_RANGE;
    let volatilities = linspace(low, high, vol_count);

    let prices: Vec<Vec<f64>> = volatilities
        .iter()
        .map(|&vol| {
            let at_vol = params.with_volatility(vol);
            spots
                .iter()
                .map(|&spot| BlackScholes::price(&at_vol.with_spot(spot)))
                .collect()
        })
        .collect();
    trace!(
        "price surface: {} spots x {} volatilities",
        spots.len(),
        volatilities.len()
    );

    PriceSurface {
        spots,
        volatilities,
        prices,
    }
}
