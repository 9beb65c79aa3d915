//! two_targets — runs the weekly and the 4-day wage simulations back to back.
//!
//! Each run writes `logs/<prefix>_pricing_<unixtime>.json` plus the matching
//! `_trips.csv` / `_summary.csv` pair, and prints the JSON document to stdout.  Pass a JSON pricing config path as the first argument
//! to override the compiled-in constants.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gw_core::{Clock, PricingConfig, SystemClock};
use gw_output::{JsonReportWriter, ReportObserver, ReportPrefix, render_json, write_csv_report};
use gw_sim::{OrderSimulator, OrderSimulatorBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const LOG_DIR: &str = "logs";

const WEEKLY_HOURS:   u32 = 40;
const WEEKLY_TRIPS:   u32 = 150;
const FOUR_DAY_HOURS: u32 = 32;
const FOUR_DAY_TRIPS: u32 = 128;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_config() -> Result<PricingConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading pricing config");
            PricingConfig::from_json_path(Path::new(&path))
                .with_context(|| format!("loading pricing config from {path}"))
        }
        None => Ok(PricingConfig::default()),
    }
}

/// Run one simulation, write its reports, and print it.
///
/// A report that cannot be written is logged; the run is still printed.
fn run_and_report(
    sim:          &mut OrderSimulator,
    prefix:       ReportPrefix,
    hours:        u32,
    target_trips: u32,
    target_wage:  f64,
) -> Result<()> {
    let dir = Path::new(LOG_DIR);
    let unix_secs = SystemClock.unix_secs();
    let mut obs = ReportObserver::new(JsonReportWriter::new(dir, prefix, unix_secs));

    let run = sim.simulate_orders_observed(hours, target_trips, target_wage, &mut obs)?;
    if let Some(err) = obs.take_error() {
        warn!(error = %err, "{prefix} JSON report not saved");
    }
    if let Err(err) = write_csv_report(dir, prefix, unix_secs, &run) {
        warn!(error = %err, "{prefix} CSV report not saved");
    }

    println!("{}", render_json(&run)?);
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let weekly_wage = config.target_hourly_wage;
    let four_day_wage = config.target_hourly_wage_4day;
    for (tier, pricing) in config.base_pricing.iter() {
        info!(
            %tier,
            km = pricing.km,
            base_price = pricing.base_price,
            achieved_price = pricing.achieved_price,
            orders_per_hour = pricing.orders_per_hour,
            "tier pricing"
        );
    }

    let mut sim = OrderSimulatorBuilder::new(config).build()?;
    info!(seed = sim.seed(), "simulator ready");

    println!("=== Weekly target: {WEEKLY_HOURS} h, {WEEKLY_TRIPS} trips at {weekly_wage}/h ===");
    run_and_report(&mut sim, ReportPrefix::Weekly, WEEKLY_HOURS, WEEKLY_TRIPS, weekly_wage)?;

    println!();
    println!("=== 4-day target: {FOUR_DAY_HOURS} h, {FOUR_DAY_TRIPS} trips at {four_day_wage}/h ===");
    run_and_report(&mut sim, ReportPrefix::FourDay, FOUR_DAY_HOURS, FOUR_DAY_TRIPS, four_day_wage)?;

    Ok(())
}
