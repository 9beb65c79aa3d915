//! Pricing configuration.
//!
//! `PricingConfig` is the single immutable settings value shared by the price
//! calculator and the order simulator.  It is built once (from `Default` or a
//! JSON file), validated once, and never mutated afterwards.
//!
//! # JSON format
//!
//! Keys mirror the field names below.  Every key is optional; missing keys take
//! the compiled-in default.
//!
//! ```json
//! {
//!   "base_pricing": {
//!     "near": { "km": 1.565, "base_price": 68.0, "achieved_price": 171.36, "orders_per_hour": 10.0 },
//!     "mid":  { "km": 3.385, "base_price": 73.0, "achieved_price": 178.56, "orders_per_hour": 5.5 },
//!     "far":  { "km": 8.25,  "base_price": 78.0, "achieved_price": 186.24, "orders_per_hour": 4.0 }
//!   },
//!   "time_factor": { "peak": 1.2, "off_peak": 0.8 },
//!   "peak_windows": [[7, 10], [17, 20]],
//!   "target_hourly_wage": 714.0,
//!   "tax_rate": 0.1
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tier::TierTable;
use crate::{CoreError, CoreResult};

// ── Time of day ───────────────────────────────────────────────────────────────

/// Which time-factor bucket an hour falls into.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TimePeriod {
    Peak,
    OffPeak,
}

/// Price multipliers for peak and off-peak hours.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeFactors {
    pub peak:     f64,
    pub off_peak: f64,
}

impl TimeFactors {
    #[inline]
    pub fn factor(&self, period: TimePeriod) -> f64 {
        match period {
            TimePeriod::Peak => self.peak,
            TimePeriod::OffPeak => self.off_peak,
        }
    }
}

impl Default for TimeFactors {
    fn default() -> Self {
        Self { peak: 1.2, off_peak: 0.8 }
    }
}

/// Local-hour ranges counted as peak.  Each `(start, end)` pair is inclusive
/// on both ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeakWindows(Vec<(u32, u32)>);

impl PeakWindows {
    pub fn new(windows: Vec<(u32, u32)>) -> Self {
        PeakWindows(windows)
    }

    /// `true` if `hour` falls inside any window.
    pub fn contains(&self, hour: u32) -> bool {
        self.0.iter().any(|&(start, end)| (start..=end).contains(&hour))
    }

    /// The bucket `hour` belongs to.
    #[inline]
    pub fn period(&self, hour: u32) -> TimePeriod {
        if self.contains(hour) { TimePeriod::Peak } else { TimePeriod::OffPeak }
    }

    fn validate(&self) -> CoreResult<()> {
        for &(start, end) in &self.0 {
            if start > end || end > 23 {
                return Err(CoreError::Config(format!(
                    "peak window [{start}, {end}] must satisfy start <= end <= 23"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PeakWindows {
    fn default() -> Self {
        PeakWindows(vec![(7, 10), (17, 20)])
    }
}

// ── Bank details ──────────────────────────────────────────────────────────────

/// Payout account identifiers.  Copied verbatim into every trip record and
/// never used in any computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    pub bank_swift:   String,
    pub bank_account: String,
}

impl Default for BankDetails {
    fn default() -> Self {
        Self {
            bank_swift:   "CHPYTWTP".to_owned(),
            bank_account: "00210091602429".to_owned(),
        }
    }
}

// ── PricingConfig ─────────────────────────────────────────────────────────────

/// Every tunable of the pricing model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Per-tier distance, prices and throughput.
    pub base_pricing: TierTable,

    pub time_factor: TimeFactors,

    pub peak_windows: PeakWindows,

    /// Achieved ratio at or above which `achieved_price` replaces `base_price`.
    pub achieved_threshold: f64,

    /// Fraction of orders abandoned; damps every price by
    /// `1 - abandon_rate * abandon_damping`.
    pub abandon_rate: f64,

    pub abandon_damping: f64,

    /// Operating cost share deducted from the hourly wage to get the real wage.
    pub cost_percent: f64,

    /// Hourly wage needed for the weekly goal.  Compared by exact equality to
    /// select `target_trips` over `target_trips_4day`.
    pub target_hourly_wage: f64,

    pub target_hourly_wage_4day: f64,

    /// Earnings per kilometre per order, used to convert a wage gap into a
    /// distance supplement.
    pub k_factor: f64,

    pub target_trips: f64,

    pub target_trips_4day: f64,

    /// Flat bonus added to every projected total wage.
    pub bonus: f64,

    pub tax_rate: f64,

    /// Weight applied to trips on the `"uber"` platform; all other platforms
    /// use 1.0.
    pub uber_weight: f64,

    #[serde(flatten)]
    pub bank: BankDetails,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_pricing:            TierTable::default(),
            time_factor:             TimeFactors::default(),
            peak_windows:            PeakWindows::default(),
            achieved_threshold:      1.25,
            abandon_rate:            0.15,
            abandon_damping:         0.2,
            cost_percent:            0.3,
            target_hourly_wage:      714.0,
            target_hourly_wage_4day: 536.0,
            k_factor:                9.412,
            target_trips:            150.0,
            target_trips_4day:       128.0,
            bonus:                   900.0,
            tax_rate:                0.1,
            uber_weight:             1.2,
            bank:                    BankDetails::default(),
        }
    }
}

impl PricingConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Like [`from_json_path`][Self::from_json_path] but accepts any `Read`
    /// source.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: PricingConfig =
            serde_json::from_reader(reader).map_err(|e| CoreError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject any value that would make a pricing formula divide by zero,
    /// go negative, or produce a non-finite number.
    pub fn validate(&self) -> CoreResult<()> {
        self.base_pricing.validate()?;
        self.peak_windows.validate()?;

        let non_negative = [
            ("time_factor.peak", self.time_factor.peak),
            ("time_factor.off_peak", self.time_factor.off_peak),
            ("achieved_threshold", self.achieved_threshold),
            ("target_hourly_wage", self.target_hourly_wage),
            ("target_hourly_wage_4day", self.target_hourly_wage_4day),
            ("target_trips", self.target_trips),
            ("target_trips_4day", self.target_trips_4day),
            ("bonus", self.bonus),
            ("uber_weight", self.uber_weight),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let fractions = [
            ("abandon_rate", self.abandon_rate),
            ("abandon_damping", self.abandon_damping),
            ("cost_percent", self.cost_percent),
            ("tax_rate", self.tax_rate),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(CoreError::Config(format!(
                "k_factor must be positive, got {}",
                self.k_factor
            )));
        }
        Ok(())
    }

    /// Trip count used for the hours-to-target projection.
    ///
    /// Only an exact match with `target_hourly_wage` selects `target_trips`;
    /// every other wage, including `target_hourly_wage_4day`, selects
    /// `target_trips_4day`.
    #[inline]
    pub fn target_trips_for(&self, target_wage: f64) -> f64 {
        if target_wage == self.target_hourly_wage {
            self.target_trips
        } else {
            self.target_trips_4day
        }
    }
}
