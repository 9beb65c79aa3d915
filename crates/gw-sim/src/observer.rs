//! Simulation observer trait for progress reporting and data collection.

use gw_pricing::TripRecord;

use crate::SimulationSummary;

/// Callbacks invoked by
/// [`OrderSimulator::simulate_orders_observed`][crate::OrderSimulator::simulate_orders_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_trip(&mut self, hour: u32, trip: &TripRecord) {
///         println!("hour {hour}: {} {}", trip.distance_type, trip.price);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first hour.
    fn on_run_start(&mut self, _hours: u32, _target_trips: u32, _target_wage: f64) {}

    /// Called after each simulated hour with the finished (bonus-adjusted,
    /// rounded) record.  `hour` counts from 0.
    fn on_trip(&mut self, _hour: u32, _trip: &TripRecord) {}

    /// Called once after the loop ends, with the final summary.
    fn on_run_end(&mut self, _summary: &SimulationSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
