//! JSON report backend.
//!
//! One file per run, `<prefix>_pricing_<unixtime>.json`, holding a
//! pretty-printed array: every trip record in order, then the summary record.
//! Records are buffered in memory and written on [`ReportWriter::finish`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use gw_pricing::TripRecord;
use gw_sim::{ReportEntry, SimulationRun, SimulationSummary};
use tracing::info;

use crate::naming::{ReportPrefix, report_path};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// Buffers one run and writes it as a JSON array.
pub struct JsonReportWriter {
    path:     PathBuf,
    entries:  Vec<ReportEntry>,
    finished: bool,
}

impl JsonReportWriter {
    /// Target `<dir>/<prefix>_pricing_<unix_secs>.json`.  Nothing touches the
    /// filesystem until `finish`.
    pub fn new(dir: &Path, prefix: ReportPrefix, unix_secs: i64) -> Self {
        Self {
            path:     report_path(dir, prefix, unix_secs, "json"),
            entries:  Vec::new(),
            finished: false,
        }
    }

    /// Where the report is (or will be) written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_trip(&mut self, trip: &TripRecord) -> OutputResult<()> {
        self.entries.push(ReportEntry::Trip(trip.clone()));
        Ok(())
    }

    fn write_summary(&mut self, summary: &SimulationSummary) -> OutputResult<()> {
        self.entries.push(ReportEntry::Summary(*summary));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        write_entries(&self.path, &self.entries)?;
        info!(path = %self.path.display(), records = self.entries.len(), "report written");
        Ok(())
    }
}

// ── One-shot helpers ──────────────────────────────────────────────────────────

/// Write a finished run to `<dir>/<prefix>_pricing_<unix_secs>.json`,
/// creating `dir` if needed.  Returns the path written.
pub fn write_json_report(
    dir:       &Path,
    prefix:    ReportPrefix,
    unix_secs: i64,
    run:       &SimulationRun,
) -> OutputResult<PathBuf> {
    let path = report_path(dir, prefix, unix_secs, "json");
    write_entries(&path, &run.to_entries())?;
    info!(path = %path.display(), records = run.trips.len() + 1, "report written");
    Ok(path)
}

/// The report document as pretty-printed JSON, for console output.
pub fn render_json(run: &SimulationRun) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(&run.to_entries())?)
}

/// Parse a JSON report back into its entries.
pub fn read_report(path: &Path) -> OutputResult<Vec<ReportEntry>> {
    let file = File::open(path).map_err(|source| OutputError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Parse a JSON report back into a [`SimulationRun`].
pub fn read_run(path: &Path) -> OutputResult<SimulationRun> {
    SimulationRun::from_entries(read_report(path)?).ok_or_else(|| {
        OutputError::Malformed(format!(
            "{}: expected trip records followed by exactly one summary",
            path.display()
        ))
    })
}

fn write_entries(path: &Path, entries: &[ReportEntry]) -> OutputResult<()> {
    let io_err = |source| OutputError::Write { path: path.to_owned(), source };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut out, entries)
        .map_err(|e| OutputError::from_json_write(path, e))?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(())
}
