//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `<prefix>_pricing_<unixtime>_trips.csv`
//! - `<prefix>_pricing_<unixtime>_summary.csv`
//!
//! Rows are streamed as they arrive.  Optional bonus columns are empty when
//! the bonus was not applied.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use gw_pricing::TripRecord;
use gw_sim::{SimulationRun, SimulationSummary};
use serde::Serialize;
use tracing::info;

use crate::naming::{ReportPrefix, report_stem};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

pub const TRIP_HEADERS: [&str; 14] = [
    "distance_type",
    "price",
    "hourly_wage",
    "real_wage",
    "supplement_km",
    "hours_to_target",
    "total_wage",
    "platform",
    "tax",
    "timestamp",
    "bank_swift",
    "bank_account",
    "cross_bonus",
    "fat_order_surcharge",
];

pub const SUMMARY_HEADERS: [&str; 6] = [
    "total_hours",
    "total_trips",
    "total_wage",
    "total_real_wage",
    "weekly_target_achieved",
    "four_day_target_achieved",
];

/// One trip flattened to a fixed column set.
#[derive(Serialize)]
struct TripRow<'a> {
    distance_type:       &'a str,
    price:               f64,
    hourly_wage:         f64,
    real_wage:           f64,
    supplement_km:       f64,
    hours_to_target:     f64,
    total_wage:          f64,
    platform:            &'a str,
    tax:                 f64,
    timestamp:           &'a str,
    bank_swift:          &'a str,
    bank_account:        &'a str,
    cross_bonus:         Option<f64>,
    fat_order_surcharge: Option<f64>,
}

impl<'a> From<&'a TripRecord> for TripRow<'a> {
    fn from(t: &'a TripRecord) -> Self {
        Self {
            distance_type:       t.distance_type.as_str(),
            price:               t.price,
            hourly_wage:         t.hourly_wage,
            real_wage:           t.real_wage,
            supplement_km:       t.supplement_km,
            hours_to_target:     t.hours_to_target,
            total_wage:          t.total_wage,
            platform:            &t.platform,
            tax:                 t.tax,
            timestamp:           &t.timestamp,
            bank_swift:          &t.bank_swift,
            bank_account:        &t.bank_account,
            cross_bonus:         t.cross_bonus,
            fat_order_surcharge: t.fat_order_surcharge,
        }
    }
}

/// Writes a run to two CSV files.
pub struct CsvReportWriter {
    trips:        Writer<File>,
    summaries:    Writer<File>,
    trips_path:   PathBuf,
    summary_path: PathBuf,
    finished:     bool,
}

impl CsvReportWriter {
    /// Create `dir` if needed, open (or truncate) both CSV files and write the
    /// header rows.
    pub fn new(dir: &Path, prefix: ReportPrefix, unix_secs: i64) -> OutputResult<Self> {
        fs::create_dir_all(dir).map_err(|source| OutputError::Write {
            path: dir.to_owned(),
            source,
        })?;
        let stem = report_stem(prefix, unix_secs);

        let trips_path = dir.join(format!("{stem}_trips.csv"));
        let mut trips = headerless(&trips_path)?;
        trips
            .write_record(TRIP_HEADERS)
            .map_err(|e| OutputError::from_csv_write(&trips_path, e))?;

        let summary_path = dir.join(format!("{stem}_summary.csv"));
        let mut summaries = headerless(&summary_path)?;
        summaries
            .write_record(SUMMARY_HEADERS)
            .map_err(|e| OutputError::from_csv_write(&summary_path, e))?;

        Ok(Self {
            trips,
            summaries,
            trips_path,
            summary_path,
            finished: false,
        })
    }

    pub fn trips_path(&self) -> &Path {
        &self.trips_path
    }

    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }
}

/// A writer that leaves header rows to the caller.
fn headerless(path: &Path) -> OutputResult<Writer<File>> {
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_owned(),
        source,
    })?;
    Ok(WriterBuilder::new().has_headers(false).from_writer(file))
}

impl ReportWriter for CsvReportWriter {
    fn write_trip(&mut self, trip: &TripRecord) -> OutputResult<()> {
        self.trips
            .serialize(TripRow::from(trip))
            .map_err(|e| OutputError::from_csv_write(&self.trips_path, e))
    }

    fn write_summary(&mut self, summary: &SimulationSummary) -> OutputResult<()> {
        self.summaries
            .serialize(summary)
            .map_err(|e| OutputError::from_csv_write(&self.summary_path, e))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush().map_err(|source| OutputError::Write {
            path: self.trips_path.clone(),
            source,
        })?;
        self.summaries.flush().map_err(|source| OutputError::Write {
            path: self.summary_path.clone(),
            source,
        })?;
        Ok(())
    }
}

// ── One-shot helper ───────────────────────────────────────────────────────────

/// Write a finished run to the CSV pair under `dir`, creating `dir` if needed.
/// Returns the trips and summary paths.
pub fn write_csv_report(
    dir:       &Path,
    prefix:    ReportPrefix,
    unix_secs: i64,
    run:       &SimulationRun,
) -> OutputResult<(PathBuf, PathBuf)> {
    let mut w = CsvReportWriter::new(dir, prefix, unix_secs)?;
    for trip in &run.trips {
        w.write_trip(trip)?;
    }
    w.write_summary(&run.summary)?;
    w.finish()?;
    info!(path = %w.trips_path.display(), rows = run.trips.len(), "CSV report written");
    Ok((w.trips_path, w.summary_path))
}
