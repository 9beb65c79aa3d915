//! The `ReportWriter` trait implemented by all backend writers.

use gw_pricing::TripRecord;
use gw_sim::SimulationSummary;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV report writers.
///
/// Driven either directly or through [`ReportObserver`][crate::ReportObserver],
/// which stores errors instead of interrupting the simulation.
pub trait ReportWriter {
    /// Append one trip record.
    fn write_trip(&mut self, trip: &TripRecord) -> OutputResult<()>;

    /// Append the closing summary record.
    fn write_summary(&mut self, summary: &SimulationSummary) -> OutputResult<()>;

    /// Flush and close all underlying files.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
