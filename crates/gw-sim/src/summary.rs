//! Run results: the per-run summary and the report sequence.

use gw_pricing::TripRecord;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one simulation run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// The configured hour bound, not the number of hours actually simulated.
    pub total_hours:              u32,
    pub total_trips:              u32,
    pub total_wage:               f64,
    pub total_real_wage:          f64,
    pub weekly_target_achieved:   bool,
    pub four_day_target_achieved: bool,
}

/// One element of a report: a trip, or the closing summary.
///
/// Serialized without a tag; the two shapes share no field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Trip(TripRecord),
    Summary(SimulationSummary),
}

/// The trips of one run plus its summary.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRun {
    pub trips:   Vec<TripRecord>,
    pub summary: SimulationSummary,
}

impl SimulationRun {
    /// Hours actually simulated (one trip record per hour).
    #[inline]
    pub fn hours_run(&self) -> usize {
        self.trips.len()
    }

    /// The report sequence: every trip in order, then the summary.
    pub fn to_entries(&self) -> Vec<ReportEntry> {
        self.trips
            .iter()
            .cloned()
            .map(ReportEntry::Trip)
            .chain(std::iter::once(ReportEntry::Summary(self.summary)))
            .collect()
    }

    /// Rebuild a run from a report sequence.
    ///
    /// Returns `None` unless the sequence is zero or more trips followed by
    /// exactly one summary.
    pub fn from_entries(entries: Vec<ReportEntry>) -> Option<Self> {
        let mut entries = entries;
        let summary = match entries.pop()? {
            ReportEntry::Summary(s) => s,
            ReportEntry::Trip(_) => return None,
        };
        let trips = entries
            .into_iter()
            .map(|e| match e {
                ReportEntry::Trip(t) => Some(t),
                ReportEntry::Summary(_) => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { trips, summary })
    }
}
