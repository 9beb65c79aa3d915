//! The `OrderSimulator` and its hourly loop.

use gw_core::{Clock, DistanceTier, SimRng, SystemClock, WeightedChoice, round_money};
use gw_pricing::{PriceCalculator, TripRecord};
use tracing::{debug, info};

use crate::{NoopObserver, SimObserver, SimResult, SimulationParams, SimulationRun, SimulationSummary};

/// The random draws for one simulated hour.
#[derive(Clone, Debug, PartialEq)]
struct OrderDraw {
    platform:       String,
    tier:           DistanceTier,
    achieved_ratio: f64,
    fat_order:      bool,
    cross_bonus:    bool,
}

/// Draws one randomized trip per simulated hour, prices it, layers bonuses,
/// and accumulates the run totals.
///
/// Create via [`OrderSimulatorBuilder`][crate::OrderSimulatorBuilder].  The
/// simulator owns its RNG; consecutive runs continue the same random stream.
pub struct OrderSimulator<C: Clock = SystemClock> {
    calculator:  PriceCalculator<C>,
    params:      SimulationParams,
    tier_choice: WeightedChoice<DistanceTier>,
    rng:         SimRng,
    seed:        u64,
}

impl<C: Clock> OrderSimulator<C> {
    pub(crate) fn from_parts(
        calculator:  PriceCalculator<C>,
        params:      SimulationParams,
        tier_choice: WeightedChoice<DistanceTier>,
        seed:        u64,
    ) -> Self {
        Self {
            calculator,
            params,
            tier_choice,
            rng: SimRng::new(seed),
            seed,
        }
    }

    #[inline]
    pub fn calculator(&self) -> &PriceCalculator<C> {
        &self.calculator
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// The seed the RNG was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate up to `hours` hours, stopping early once the accumulated trip
    /// count reaches `target_trips`.
    ///
    /// `target_wage` is passed through to the price calculator, where an exact
    /// match with the configured weekly wage selects the weekly trip target.
    pub fn simulate_orders(
        &mut self,
        hours:        u32,
        target_trips: u32,
        target_wage:  f64,
    ) -> SimResult<SimulationRun> {
        self.simulate_orders_observed(hours, target_trips, target_wage, &mut NoopObserver)
    }

    /// Like [`simulate_orders`][Self::simulate_orders], with observer hooks.
    pub fn simulate_orders_observed<O: SimObserver>(
        &mut self,
        hours:        u32,
        target_trips: u32,
        target_wage:  f64,
        observer:     &mut O,
    ) -> SimResult<SimulationRun> {
        info!(hours, target_trips, target_wage, seed = self.seed, "simulation started");
        observer.on_run_start(hours, target_trips, target_wage);

        let mut trips_log: Vec<TripRecord> = Vec::with_capacity(hours as usize);
        let mut total_wage = 0.0;
        let mut total_real_wage = 0.0;
        let mut trips: u32 = 0;

        for hour in 0..hours {
            if trips >= target_trips {
                break;
            }

            let draw = self.draw_order(trips, target_trips);
            let (record, hourly_wage, real_wage, whole_orders) =
                self.price_order(&draw, target_wage)?;

            total_wage += hourly_wage;
            total_real_wage += real_wage;
            trips = trips.saturating_add(whole_orders);

            debug!(
                hour,
                tier = %record.distance_type,
                platform = %record.platform,
                price = record.price,
                fat_order = draw.fat_order,
                cross_bonus = draw.cross_bonus,
                trips,
                "trip simulated"
            );
            observer.on_trip(hour, &record);
            trips_log.push(record);
        }

        let summary = self.summarize(hours, trips, total_wage, total_real_wage);
        info!(
            hours_run = trips_log.len(),
            total_trips = summary.total_trips,
            total_wage = summary.total_wage,
            total_real_wage = summary.total_real_wage,
            weekly = summary.weekly_target_achieved,
            four_day = summary.four_day_target_achieved,
            "simulation finished"
        );
        observer.on_run_end(&summary);

        Ok(SimulationRun { trips: trips_log, summary })
    }

    // ── Hour processing ───────────────────────────────────────────────────

    /// Draw platform, tier, fat order and cross bonus, in that order.
    fn draw_order(&mut self, trips: u32, target_trips: u32) -> OrderDraw {
        let p = &self.params;

        let platform = if self.rng.unit() < p.primary_share {
            p.primary_platform.clone()
        } else {
            p.secondary_platform.clone()
        };
        let tier = self.tier_choice.sample(&mut self.rng);
        let achieved_ratio = if f64::from(trips) >= f64::from(target_trips) * p.late_run_fraction {
            p.late_achieved_ratio
        } else {
            p.early_achieved_ratio
        };
        let fat_order = self.rng.chance(p.fat_order_probability);
        // No draw is consumed for other tiers.
        let cross_bonus = tier == p.cross_bonus_tier && self.rng.chance(p.cross_bonus_probability);

        OrderDraw { platform, tier, achieved_ratio, fat_order, cross_bonus }
    }

    /// Price a drawn order and apply its bonuses.
    ///
    /// Returns the rounded record, the unrounded hourly and real wage for the
    /// running totals, and the whole trips completed this hour.
    fn price_order(
        &self,
        draw:        &OrderDraw,
        target_wage: f64,
    ) -> SimResult<(TripRecord, f64, f64, u32)> {
        let calc = &self.calculator;
        let p = &self.params;

        let mut quote = calc.quote(draw.tier, draw.achieved_ratio, target_wage, &draw.platform)?;
        if draw.fat_order {
            quote.add_fat_order(p.fat_order_surcharge, p.fat_order_extra_km);
        }
        if draw.cross_bonus {
            quote.add_cross_bonus(p.cross_bonus_amount);
        }
        calc.rederive(&mut quote)?;

        let whole_orders = calc.config().base_pricing.get(draw.tier)?.whole_orders_per_hour();
        let record = calc.assemble(&quote);
        Ok((record, quote.wages.hourly_wage, quote.wages.real_wage, whole_orders))
    }

    fn summarize(
        &self,
        hours:           u32,
        trips:           u32,
        total_wage:      f64,
        total_real_wage: f64,
    ) -> SimulationSummary {
        let p = &self.params;
        let total_real_wage = round_money(total_real_wage);
        SimulationSummary {
            total_hours: hours,
            total_trips: trips,
            total_wage: round_money(total_wage),
            total_real_wage,
            weekly_target_achieved: total_real_wage >= p.weekly_goal_real_wage,
            four_day_target_achieved: total_real_wage >= p.four_day_goal_real_wage
                && hours <= p.four_day_max_hours,
        }
    }
}
