//! Report file naming: `<prefix>_pricing_<unixtime>.<ext>`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::OutputError;

/// Which goal a report belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ReportPrefix {
    Weekly,
    FourDay,
}

impl ReportPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportPrefix::Weekly => "weekly",
            ReportPrefix::FourDay => "four_day",
        }
    }
}

impl fmt::Display for ReportPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPrefix {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(ReportPrefix::Weekly),
            "four_day" => Ok(ReportPrefix::FourDay),
            other => Err(OutputError::Malformed(format!(
                "unknown report prefix {other:?}: expected \"weekly\" or \"four_day\""
            ))),
        }
    }
}

/// `weekly_pricing_1700000000`: the file name without extension.
pub fn report_stem(prefix: ReportPrefix, unix_secs: i64) -> String {
    format!("{prefix}_pricing_{unix_secs}")
}

/// `weekly_pricing_1700000000.json` etc.
pub fn report_file_name(prefix: ReportPrefix, unix_secs: i64, ext: &str) -> String {
    format!("{}.{ext}", report_stem(prefix, unix_secs))
}

/// [`report_file_name`] joined onto `dir`.
pub fn report_path(dir: &Path, prefix: ReportPrefix, unix_secs: i64, ext: &str) -> PathBuf {
    dir.join(report_file_name(prefix, unix_secs, ext))
}
