//! Prices an option from dashboard inputs and prints the report as JSON.
//!
//! Usage: `pricing_report [INPUTS] [--charts]`
//!
//! Without an input file the default dashboard inputs are used
//! (S = K = 100, r = 1%, σ = 20%, T = 1 year, call).

use blackscholes_rs::prelude::{ChartData, DashboardInputs, PricingReport};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Black-Scholes pricing report
#[derive(Parser, Debug)]
#[command(name = "pricing_report")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with dashboard inputs; missing fields take their defaults
    inputs: Option<PathBuf>,

    /// Also print payoff, price curves and the price surface
    #[arg(long)]
    charts: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let inputs = match &args.inputs {
        Some(path) => DashboardInputs::from_path(path).inspect_err(|e| error!("{}", e))?,
        None => {
            info!("No input file given, using defaults");
            DashboardInputs::default()
        }
    };

    let report = PricingReport::build(&inputs).inspect_err(|e| error!("{}", e))?;
    info!(
        "{} price {:.4}: delta {:.4}, gamma {:.4}, vega {:.4}, theta {:.4}, rho {:.4}",
        report.parameters.option_type,
        report.greeks.price,
        report.greeks.delta,
        report.greeks.gamma,
        report.greeks.vega,
        report.greeks.theta,
        report.greeks.rho
    );
    info!("{}", report.implied_volatility);

    println!("{}", serde_json::to_string_pretty(&report)?);

    if args.charts {
        let charts = ChartData::build(&report.parameters);
        info!(
            "Chart data: {} payoff points, {}x{} surface",
            charts.payoff.len(),
            charts.surface.volatilities.len(),
            charts.surface.spots.len()
        );
        println!("{}", serde_json::to_string_pretty(&charts)?);
    }

    Ok(())
}
