//! Distance tiers and the per-tier pricing table.
//!
//! A tier is a delivery-distance bucket.  Each tier carries four constants:
//!
//! | Field             | Meaning                                              |
//! |-------------------|------------------------------------------------------|
//! | `km`              | representative trip distance                         |
//! | `base_price`      | price paid below the achieved-ratio threshold        |
//! | `achieved_price`  | price paid once the threshold is met                 |
//! | `orders_per_hour` | throughput baseline used for every hourly figure     |
//!
//! Lookups are always checked: [`TierTable::get`] returns
//! [`CoreError::UnknownTier`] instead of fabricating a default entry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CoreError, CoreResult};

// ── DistanceTier ──────────────────────────────────────────────────────────────

/// One of the three distance buckets.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DistanceTier {
    Near,
    Mid,
    Far,
}

impl DistanceTier {
    /// Every tier, in draw order.
    pub const ALL: [DistanceTier; 3] = [DistanceTier::Near, DistanceTier::Mid, DistanceTier::Far];

    /// The lowercase key used in configuration and report files.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceTier::Near => "near",
            DistanceTier::Mid => "mid",
            DistanceTier::Far => "far",
        }
    }
}

impl FromStr for DistanceTier {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "near" => Ok(DistanceTier::Near),
            "mid" => Ok(DistanceTier::Mid),
            "far" => Ok(DistanceTier::Far),
            other => Err(CoreError::UnknownTier(other.to_owned())),
        }
    }
}

impl fmt::Display for DistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the bare key string so the tier can be both a map key in the
// config file and a field value in report records.
impl Serialize for DistanceTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DistanceTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── TierPricing ───────────────────────────────────────────────────────────────

/// Largest accepted `orders_per_hour`.
pub const MAX_ORDERS_PER_HOUR: f64 = u32::MAX as f64;

/// Pricing and throughput constants for one tier.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierPricing {
    pub km:              f64,
    pub base_price:      f64,
    pub achieved_price:  f64,
    pub orders_per_hour: f64,
}

impl TierPricing {
    pub const fn new(km: f64, base_price: f64, achieved_price: f64, orders_per_hour: f64) -> Self {
        Self { km, base_price, achieved_price, orders_per_hour }
    }

    /// Whole trips completed per simulated hour (fraction truncated).
    #[inline]
    pub fn whole_orders_per_hour(&self) -> u32 {
        self.orders_per_hour.trunc() as u32
    }

    fn validate(&self, tier: DistanceTier) -> CoreResult<()> {
        let fields = [
            ("km", self.km),
            ("base_price", self.base_price),
            ("achieved_price", self.achieved_price),
            ("orders_per_hour", self.orders_per_hour),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "tier {tier}: {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        // Divisor of supplement_km and hours_to_target.
        if self.orders_per_hour <= 0.0 {
            return Err(CoreError::Config(format!(
                "tier {tier}: orders_per_hour must be positive, got {}",
                self.orders_per_hour
            )));
        }
        // Whole orders per hour are counted in a u32.
        if self.orders_per_hour > MAX_ORDERS_PER_HOUR {
            return Err(CoreError::Config(format!(
                "tier {tier}: orders_per_hour must be at most {MAX_ORDERS_PER_HOUR}, got {}",
                self.orders_per_hour
            )));
        }
        Ok(())
    }
}

// ── TierTable ─────────────────────────────────────────────────────────────────

/// The tier → pricing map.  Serialized as a JSON object keyed by tier name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable(BTreeMap<DistanceTier, TierPricing>);

impl TierTable {
    pub fn new(entries: impl IntoIterator<Item = (DistanceTier, TierPricing)>) -> Self {
        TierTable(entries.into_iter().collect())
    }

    /// Checked lookup.
    pub fn get(&self, tier: DistanceTier) -> CoreResult<&TierPricing> {
        self.0
            .get(&tier)
            .ok_or_else(|| CoreError::UnknownTier(tier.as_str().to_owned()))
    }

    /// Checked lookup by key name, e.g. a tier read back from a report.
    pub fn get_by_name(&self, name: &str) -> CoreResult<&TierPricing> {
        self.get(name.parse()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DistanceTier, &TierPricing)> {
        self.0.iter().map(|(t, p)| (*t, p))
    }

    /// Every tier must be present, since the simulator may draw any of them.
    pub(crate) fn validate(&self) -> CoreResult<()> {
        for tier in DistanceTier::ALL {
            let pricing = self.0.get(&tier).ok_or_else(|| {
                CoreError::Config(format!("tier table is missing the {tier} tier"))
            })?;
            pricing.validate(tier)?;
        }
        Ok(())
    }
}

impl Default for TierTable {
    fn default() -> Self {
        TierTable::new([
            (DistanceTier::Near, TierPricing::new(1.565, 68.0, 171.36, 10.0)),
            (DistanceTier::Mid, TierPricing::new(3.385, 73.0, 178.56, 5.5)),
            (DistanceTier::Far, TierPricing::new(8.25, 78.0, 186.24, 4.0)),
        ])
    }
}
