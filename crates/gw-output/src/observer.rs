//! `ReportObserver<W>` — bridges `SimObserver` to a `ReportWriter`.

use gw_pricing::TripRecord;
use gw_sim::{SimObserver, SimulationSummary};
use tracing::warn;

use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams trips and the summary into any
/// [`ReportWriter`] backend (JSON, CSV, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error]; the `SimulationRun` itself is unaffected.
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to find the files it wrote).
    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "report write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> SimObserver for ReportObserver<W> {
    fn on_trip(&mut self, _hour: u32, trip: &TripRecord) {
        let result = self.writer.write_trip(trip);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &SimulationSummary) {
        let result = self.writer.write_summary(summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
