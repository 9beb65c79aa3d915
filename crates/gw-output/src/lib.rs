//! `gw-output` — report artifacts for the gigwage simulator.
//!
//! Two backends are provided:
//!
//! | Backend | Files created                                                      |
//! |---------|--------------------------------------------------------------------|
//! | JSON    | `<prefix>_pricing_<unixtime>.json`                                 |
//! | CSV     | `<prefix>_pricing_<unixtime>_trips.csv`, `..._summary.csv`         |
//!
//! Both implement [`ReportWriter`] and can be driven by [`ReportObserver`],
//! which implements `gw_sim::SimObserver`.  The JSON document is the primary
//! artifact: an array of trip records followed by one summary record, which
//! [`read_report`] / [`read_run`] parse back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gw_output::{JsonReportWriter, ReportObserver, ReportPrefix};
//!
//! let writer = JsonReportWriter::new(Path::new("logs"), ReportPrefix::Weekly, now);
//! let mut obs = ReportObserver::new(writer);
//! let run = sim.simulate_orders_observed(40, 150, 714.0, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("report error: {e}"));
//! ```

pub mod csv_report;
pub mod error;
pub mod json_report;
pub mod naming;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv_report::{CsvReportWriter, write_csv_report};
pub use error::{OutputError, OutputResult};
pub use json_report::{JsonReportWriter, read_report, read_run, render_json, write_json_report};
pub use naming::{ReportPrefix, report_file_name, report_path};
pub use observer::ReportObserver;
pub use writer::ReportWriter;
