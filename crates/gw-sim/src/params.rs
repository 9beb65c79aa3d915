//! Order-draw probabilities, bonus amounts, and goal thresholds.

use gw_core::DistanceTier;
use gw_pricing::{FOODPANDA, UBER};
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Categorical weights for the tier draw.  Need not sum to 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    pub near: f64,
    pub mid:  f64,
    pub far:  f64,
}

impl TierWeights {
    pub fn entries(&self) -> [(DistanceTier, f64); 3] {
        [
            (DistanceTier::Near, self.near),
            (DistanceTier::Mid, self.mid),
            (DistanceTier::Far, self.far),
        ]
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self { near: 0.5, mid: 0.3, far: 0.2 }
    }
}

/// Everything the simulation loop draws or adds on top of the pricing model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Platform drawn with probability `primary_share`.
    pub primary_platform: String,

    /// Platform drawn otherwise.
    pub secondary_platform: String,

    pub primary_share: f64,

    pub tier_weights: TierWeights,

    /// Fraction of the trip target after which the late-run ratio applies.
    pub late_run_fraction: f64,

    /// Achieved ratio before `late_run_fraction` of the target is reached.
    pub early_achieved_ratio: f64,

    pub late_achieved_ratio: f64,

    pub fat_order_probability: f64,

    pub fat_order_surcharge: f64,

    /// Extra supplement distance for a fat order.
    pub fat_order_extra_km: f64,

    /// Only trips on this tier can earn the cross-district bonus.
    pub cross_bonus_tier: DistanceTier,

    pub cross_bonus_probability: f64,

    pub cross_bonus_amount: f64,

    /// Real-wage total that counts as meeting the weekly goal.
    pub weekly_goal_real_wage: f64,

    pub four_day_goal_real_wage: f64,

    /// The four-day goal only counts for runs bounded at or below this.
    pub four_day_max_hours: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            primary_platform:        UBER.to_owned(),
            secondary_platform:      FOODPANDA.to_owned(),
            primary_share:           0.6,
            tier_weights:            TierWeights::default(),
            late_run_fraction:       0.8,
            early_achieved_ratio:    1.0,
            late_achieved_ratio:     1.25,
            fat_order_probability:   0.1,
            fat_order_surcharge:     200.0,
            fat_order_extra_km:      8.0,
            cross_bonus_tier:        DistanceTier::Far,
            cross_bonus_probability: 0.2,
            cross_bonus_amount:      50.0,
            weekly_goal_real_wage:   20_000.0,
            four_day_goal_real_wage: 12_000.0,
            four_day_max_hours:      32,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> SimResult<()> {
        let probabilities = [
            ("primary_share", self.primary_share),
            ("fat_order_probability", self.fat_order_probability),
            ("cross_bonus_probability", self.cross_bonus_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::Config(format!("{name} must be within [0, 1], got {p}")));
            }
        }

        let non_negative = [
            ("tier_weights.near", self.tier_weights.near),
            ("tier_weights.mid", self.tier_weights.mid),
            ("tier_weights.far", self.tier_weights.far),
            ("late_run_fraction", self.late_run_fraction),
            ("early_achieved_ratio", self.early_achieved_ratio),
            ("late_achieved_ratio", self.late_achieved_ratio),
            ("fat_order_surcharge", self.fat_order_surcharge),
            ("fat_order_extra_km", self.fat_order_extra_km),
            ("cross_bonus_amount", self.cross_bonus_amount),
            ("weekly_goal_real_wage", self.weekly_goal_real_wage),
            ("four_day_goal_real_wage", self.four_day_goal_real_wage),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let w = &self.tier_weights;
        if w.near + w.mid + w.far <= 0.0 {
            return Err(SimError::Config("tier_weights must not all be zero".to_owned()));
        }
        Ok(())
    }
}
