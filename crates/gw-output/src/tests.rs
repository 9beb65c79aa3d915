//! Integration tests for gw-output.

use gw_core::{FixedClock, PricingConfig};
use gw_sim::{OrderSimulator, OrderSimulatorBuilder, SimulationRun};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const UNIX: i64 = 1_704_070_800;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn sim(seed: u64) -> OrderSimulator<FixedClock> {
    OrderSimulatorBuilder::new(PricingConfig::default())
        .seed(seed)
        .clock(FixedClock::at_local_hour(9).expect("valid hour"))
        .build()
        .unwrap()
}

fn run(seed: u64, hours: u32) -> SimulationRun {
    sim(seed).simulate_orders(hours, 150, 714.0).unwrap()
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naming_tests {
    use std::path::Path;

    use super::*;
    use crate::OutputError;
    use crate::naming::{ReportPrefix, report_file_name, report_path, report_stem};

    #[test]
    fn file_names() {
        assert_eq!(report_stem(ReportPrefix::Weekly, UNIX), "weekly_pricing_1704070800");
        assert_eq!(
            report_file_name(ReportPrefix::FourDay, 42, "json"),
            "four_day_pricing_42.json"
        );
        assert_eq!(
            report_path(Path::new("logs"), ReportPrefix::Weekly, 7, "json"),
            Path::new("logs").join("weekly_pricing_7.json")
        );
    }

    #[test]
    fn prefix_parses() {
        assert_eq!("weekly".parse::<ReportPrefix>().unwrap(), ReportPrefix::Weekly);
        assert_eq!("four_day".parse::<ReportPrefix>().unwrap(), ReportPrefix::FourDay);
        assert!(matches!("daily".parse::<ReportPrefix>(), Err(OutputError::Malformed(_))));
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use gw_sim::ReportEntry;

    use super::*;
    use crate::json_report::{JsonReportWriter, read_report, read_run, render_json, write_json_report};
    use crate::naming::ReportPrefix;
    use crate::writer::ReportWriter;
    use crate::OutputError;

    #[test]
    fn one_shot_round_trip() {
        let dir = tmp();
        let run = run(3, 40);
        let path = write_json_report(dir.path(), ReportPrefix::Weekly, UNIX, &run).unwrap();

        assert_eq!(path, dir.path().join("weekly_pricing_1704070800.json"));
        assert_eq!(read_run(&path).unwrap(), run);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("logs").join("nested");
        let path = write_json_report(&nested, ReportPrefix::FourDay, UNIX, &run(3, 5)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn summary_is_last_element() {
        let dir = tmp();
        let run = run(8, 12);
        let path = write_json_report(dir.path(), ReportPrefix::Weekly, UNIX, &run).unwrap();

        let entries = read_report(&path).unwrap();
        assert_eq!(entries.len(), run.trips.len() + 1);
        assert_eq!(entries.last(), Some(&ReportEntry::Summary(run.summary)));
        assert!(entries[..entries.len() - 1].iter().all(|e| matches!(e, ReportEntry::Trip(_))));
    }

    #[test]
    fn pretty_document_field_names() {
        let text = render_json(&run(5, 3)).unwrap();
        assert!(text.starts_with("[\n  {"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let first = value[0].as_object().unwrap();
        for key in [
            "distance_type", "price", "hourly_wage", "real_wage", "supplement_km",
            "hours_to_target", "total_wage", "platform", "tax", "timestamp",
            "bank_swift", "bank_account",
        ] {
            assert!(first.contains_key(key), "missing {key}");
        }
        assert_eq!(first["timestamp"], "1704070800");
        assert_eq!(first["bank_swift"], "CHPYTWTP");
    }

    #[test]
    fn streaming_writer_matches_one_shot() {
        let dir = tmp();
        let run = run(11, 20);

        let mut w = JsonReportWriter::new(dir.path(), ReportPrefix::FourDay, UNIX);
        assert!(!w.path().exists());
        for trip in &run.trips {
            w.write_trip(trip).unwrap();
        }
        w.write_summary(&run.summary).unwrap();
        w.finish().unwrap();

        assert_eq!(read_run(w.path()).unwrap(), run);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = JsonReportWriter::new(dir.path(), ReportPrefix::Weekly, UNIX);
        w.write_summary(&run(1, 2).summary).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(read_report(w.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tmp();
        let result = read_report(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(OutputError::Read { .. })));
    }

    #[test]
    fn invalid_json_is_json_error() {
        let dir = tmp();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        assert!(matches!(read_report(&path), Err(OutputError::Json(_))));
    }

    #[test]
    fn trips_without_summary_are_malformed() {
        let dir = tmp();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(read_report(&path).unwrap().is_empty());
        assert!(matches!(read_run(&path), Err(OutputError::Malformed(_))));
    }

    #[test]
    fn unwritable_directory_is_write_error() {
        let dir = tmp();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let result = write_json_report(&blocker, ReportPrefix::Weekly, UNIX, &run(1, 2));
        assert!(matches!(result, Err(OutputError::Write { .. })));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv_report::{CsvReportWriter, SUMMARY_HEADERS, TRIP_HEADERS, write_csv_report};
    use crate::naming::ReportPrefix;
    use crate::writer::ReportWriter;
    use crate::OutputError;

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path(), ReportPrefix::Weekly, UNIX).unwrap();
        w.finish().unwrap();

        assert_eq!(w.trips_path(), dir.path().join("weekly_pricing_1704070800_trips.csv"));
        assert_eq!(w.summary_path(), dir.path().join("weekly_pricing_1704070800_summary.csv"));
        assert_eq!(headers(w.trips_path()), TRIP_HEADERS);
        assert_eq!(headers(w.summary_path()), SUMMARY_HEADERS);
    }

    #[test]
    fn rows_written() {
        let dir = tmp();
        let run = run(6, 15);
        let mut w = CsvReportWriter::new(dir.path(), ReportPrefix::FourDay, UNIX).unwrap();
        for trip in &run.trips {
            w.write_trip(trip).unwrap();
        }
        w.write_summary(&run.summary).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(w.trips_path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), run.trips.len());
        for (row, trip) in rows.iter().zip(&run.trips) {
            assert_eq!(&row[0], trip.distance_type.as_str());
            assert_eq!(row[1].parse::<f64>().unwrap(), trip.price);
            assert_eq!(&row[7], trip.platform);
            assert_eq!(&row[9], trip.timestamp);
            // Empty bonus column when the bonus was not applied.
            assert_eq!(row[12].is_empty(), trip.cross_bonus.is_none());
            assert_eq!(row[13].is_empty(), trip.fat_order_surcharge.is_none());
        }

        let mut rdr = csv::Reader::from_path(w.summary_path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1].parse::<u32>().unwrap(), run.summary.total_trips);
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), run.summary.total_real_wage);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path(), ReportPrefix::Weekly, UNIX).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn one_shot_writes_both_files() {
        let dir = tmp();
        let run = run(9, 10);
        let (trips_path, summary_path) =
            write_csv_report(dir.path(), ReportPrefix::Weekly, UNIX, &run).unwrap();

        assert_eq!(summary_path, dir.path().join("weekly_pricing_1704070800_summary.csv"));
        let mut rdr = csv::Reader::from_path(&trips_path).unwrap();
        assert_eq!(rdr.records().count(), run.trips.len());
        let mut rdr = csv::Reader::from_path(&summary_path).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }

    #[test]
    fn uncreatable_trips_file_is_write_error() {
        let dir = tmp();
        let blocked = dir.path().join("weekly_pricing_1704070800_trips.csv");
        std::fs::create_dir(&blocked).unwrap();

        let result = CsvReportWriter::new(dir.path(), ReportPrefix::Weekly, UNIX);
        assert!(matches!(result, Err(OutputError::Write { ref path, .. }) if *path == blocked));
    }
}

// ── Error mapping ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod error_tests {
    use std::io;
    use std::path::Path;

    use crate::OutputError;

    #[test]
    fn csv_io_failure_is_write_error() {
        let err = csv::Error::from(io::Error::other("disk full"));
        let mapped = OutputError::from_csv_write(Path::new("r.csv"), err);
        assert!(matches!(
            mapped,
            OutputError::Write { ref path, ref source }
                if path == Path::new("r.csv") && source.kind() == io::ErrorKind::Other
        ));
    }

    #[test]
    fn json_io_failure_is_write_error() {
        let err = serde_json::Error::io(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
        let mapped = OutputError::from_json_write(Path::new("r.json"), err);
        assert!(matches!(
            mapped,
            OutputError::Write { ref source, .. } if source.kind() == io::ErrorKind::WriteZero
        ));
    }

    #[test]
    fn json_data_failure_stays_json_error() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let mapped = OutputError::from_json_write(Path::new("r.json"), err);
        assert!(matches!(mapped, OutputError::Json(_)));
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::csv_report::CsvReportWriter;
    use crate::json_report::{JsonReportWriter, read_run};
    use crate::naming::ReportPrefix;
    use crate::observer::ReportObserver;
    use crate::OutputError;

    #[test]
    fn json_observer_writes_run() {
        let dir = tmp();
        let mut obs = ReportObserver::new(JsonReportWriter::new(dir.path(), ReportPrefix::Weekly, UNIX));
        let run = sim(17).simulate_orders_observed(40, 150, 714.0, &mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let writer = obs.into_writer();
        assert_eq!(read_run(writer.path()).unwrap(), run);
    }

    #[test]
    fn csv_observer_writes_run() {
        let dir = tmp();
        let writer = CsvReportWriter::new(dir.path(), ReportPrefix::FourDay, UNIX).unwrap();
        let mut obs = ReportObserver::new(writer);
        let run = sim(17).simulate_orders_observed(32, 128, 536.0, &mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let mut rdr = csv::Reader::from_path(obs.writer().trips_path()).unwrap();
        assert_eq!(rdr.records().count(), run.trips.len());
    }

    #[test]
    fn write_failure_stored_and_run_returned() {
        let dir = tmp();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let mut obs = ReportObserver::new(JsonReportWriter::new(&blocker, ReportPrefix::Weekly, UNIX));
        let run = sim(2).simulate_orders_observed(10, 150, 714.0, &mut obs).unwrap();

        assert!(!run.trips.is_empty());
        assert!(matches!(obs.take_error(), Some(OutputError::Write { .. })));
        assert!(obs.take_error().is_none());
    }
}
