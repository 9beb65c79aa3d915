//! Trip quote (unrounded working values) and trip record (reported values).

use gw_core::{BankDetails, DistanceTier, round_distance, round_money};
use serde::{Deserialize, Serialize};

/// Hourly wage, post-cost wage and tax derived from one price.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WageBreakdown {
    pub hourly_wage: f64,
    pub real_wage:   f64,
    pub tax:         f64,
}

// ── TripQuote ─────────────────────────────────────────────────────────────────

/// Full-precision result of pricing one trip.
///
/// The simulator layers bonuses onto a quote and re-derives the wages before
/// rounding, so no figure is rounded twice.  Convert to a [`TripRecord`] with
/// [`PriceCalculator::assemble`][crate::PriceCalculator::assemble].
#[derive(Clone, Debug, PartialEq)]
pub struct TripQuote {
    pub tier:                DistanceTier,
    pub platform:            String,
    pub price:               f64,
    pub wages:               WageBreakdown,
    pub supplement_km:       f64,
    pub hours_to_target:     f64,
    pub total_wage:          f64,
    /// Epoch seconds read from the calculator's clock.
    pub unix_secs:           i64,
    pub cross_bonus:         Option<f64>,
    pub fat_order_surcharge: Option<f64>,
}

impl TripQuote {
    /// Oversized order: flat surcharge on the price plus extra distance.
    ///
    /// Wages are stale until re-derived.
    pub fn add_fat_order(&mut self, surcharge: f64, extra_km: f64) {
        self.price += surcharge;
        self.supplement_km += extra_km;
        self.fat_order_surcharge = Some(surcharge);
    }

    /// Cross-district bonus on the price.
    ///
    /// Wages are stale until re-derived.
    pub fn add_cross_bonus(&mut self, amount: f64) {
        self.price += amount;
        self.cross_bonus = Some(amount);
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One priced trip as it appears in a report.
///
/// Monetary and hour fields are rounded to 2 decimals, `supplement_km` to 3.
/// Field names are the report format and must not change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub distance_type:   DistanceTier,
    pub price:           f64,
    pub hourly_wage:     f64,
    pub real_wage:       f64,
    /// Extra km per hour needed to reach the target wage.  Negative when the
    /// tier already beats the target.
    pub supplement_km:   f64,
    pub hours_to_target: f64,
    pub total_wage:      f64,
    pub platform:        String,
    pub tax:             f64,
    /// Epoch seconds, as a string.
    pub timestamp:       String,
    pub bank_swift:      String,
    pub bank_account:    String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_bonus: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_order_surcharge: Option<f64>,
}

impl TripRecord {
    pub(crate) fn from_quote(quote: &TripQuote, bank: &BankDetails) -> Self {
        Self {
            distance_type:       quote.tier,
            price:               round_money(quote.price),
            hourly_wage:         round_money(quote.wages.hourly_wage),
            real_wage:           round_money(quote.wages.real_wage),
            supplement_km:       round_distance(quote.supplement_km),
            hours_to_target:     round_money(quote.hours_to_target),
            total_wage:          round_money(quote.total_wage),
            platform:            quote.platform.clone(),
            tax:                 round_money(quote.wages.tax),
            timestamp:           quote.unix_secs.to_string(),
            bank_swift:          bank.bank_swift.clone(),
            bank_account:        bank.bank_account.clone(),
            cross_bonus:         quote.cross_bonus.map(round_money),
            fat_order_surcharge: quote.fat_order_surcharge.map(round_money),
        }
    }
}
