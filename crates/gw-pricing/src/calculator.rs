//! The per-trip pricing formula.

use chrono::Timelike;
use gw_core::{Clock, DistanceTier, PricingConfig, SystemClock, TierPricing, TimePeriod};
use tracing::trace;

use crate::error::ensure_finite;
use crate::{PricingResult, TripQuote, TripRecord, WageBreakdown};

/// The one platform with a non-unit weight.
pub const UBER: &str = "uber";

/// The alternative platform drawn by the simulator.
pub const FOODPANDA: &str = "foodpanda";

/// Prices single trips against an immutable [`PricingConfig`].
///
/// The only ambient input is the injected [`Clock`], read once per quote for
/// both the peak-hour check and the record timestamp.
///
/// ```rust,ignore
/// let calc = PriceCalculator::new(PricingConfig::default(), SystemClock)?;
/// let record = calc.calculate_price(DistanceTier::Mid, 1.0, 714.0, "uber")?;
/// ```
#[derive(Clone, Debug)]
pub struct PriceCalculator<C: Clock = SystemClock> {
    config: PricingConfig,
    clock:  C,
}

impl<C: Clock> PriceCalculator<C> {
    /// Validate `config` and bind it to `clock`.
    pub fn new(config: PricingConfig, clock: C) -> PricingResult<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    #[inline]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Is the clock's current local hour a peak hour?
    pub fn is_peak_hour(&self) -> bool {
        self.is_peak_hour_at(self.clock.local_hour())
    }

    /// Is `hour` (0–23) a peak hour?
    #[inline]
    pub fn is_peak_hour_at(&self, hour: u32) -> bool {
        self.config.peak_windows.contains(hour)
    }

    #[inline]
    pub fn platform_weight(&self, platform: &str) -> f64 {
        if platform == UBER { self.config.uber_weight } else { 1.0 }
    }

    /// Hourly wage, real wage and tax for a trip priced at `price` on `tier`.
    pub fn derive_wages(&self, price: f64, tier: &TierPricing) -> WageBreakdown {
        let hourly_wage = price * tier.orders_per_hour;
        let real_wage = hourly_wage * (1.0 - self.config.cost_percent);
        WageBreakdown {
            hourly_wage,
            real_wage,
            tax: real_wage * self.config.tax_rate,
        }
    }

    /// Price one trip at full precision.
    pub fn quote(
        &self,
        tier:           DistanceTier,
        achieved_ratio: f64,
        target_wage:    f64,
        platform:       &str,
    ) -> PricingResult<TripQuote> {
        let cfg = &self.config;
        let pricing = cfg.base_pricing.get(tier)?;

        let now = self.clock.now();
        let hour = now.hour();
        let period = cfg.peak_windows.period(hour);
        let time_factor = cfg.time_factor.factor(period);

        let unit_price = if achieved_ratio >= cfg.achieved_threshold {
            pricing.achieved_price
        } else {
            pricing.base_price
        };
        let price = unit_price
            * time_factor
            * self.platform_weight(platform)
            * (1.0 - cfg.abandon_rate * cfg.abandon_damping);

        let wages = self.derive_wages(price, pricing);
        let supplement_km = (target_wage / pricing.orders_per_hour) / cfg.k_factor - pricing.km;
        let hours_to_target = cfg.target_trips_for(target_wage) / pricing.orders_per_hour;
        let total_wage = hours_to_target * wages.hourly_wage + cfg.bonus;

        ensure_finite("price", price)?;
        ensure_finite("hourly_wage", wages.hourly_wage)?;
        ensure_finite("supplement_km", supplement_km)?;
        ensure_finite("hours_to_target", hours_to_target)?;
        ensure_finite("total_wage", total_wage)?;

        trace!(
            %tier,
            platform,
            peak = period == TimePeriod::Peak,
            price,
            "quoted trip"
        );

        Ok(TripQuote {
            tier,
            platform: platform.to_owned(),
            price,
            wages,
            supplement_km,
            hours_to_target,
            total_wage,
            unix_secs: now.timestamp(),
            cross_bonus: None,
            fat_order_surcharge: None,
        })
    }

    /// Recompute the wages of `quote` from its (possibly bonus-adjusted) price.
    pub fn rederive(&self, quote: &mut TripQuote) -> PricingResult<()> {
        let pricing = self.config.base_pricing.get(quote.tier)?;
        ensure_finite("price", quote.price)?;
        quote.wages = self.derive_wages(quote.price, pricing);
        Ok(())
    }

    /// Round a quote into a report record, attaching the bank fields.
    pub fn assemble(&self, quote: &TripQuote) -> TripRecord {
        TripRecord::from_quote(quote, &self.config.bank)
    }

    /// Price one trip and return the rounded record.
    pub fn calculate_price(
        &self,
        tier:           DistanceTier,
        achieved_ratio: f64,
        target_wage:    f64,
        platform:       &str,
    ) -> PricingResult<TripRecord> {
        let quote = self.quote(tier, achieved_ratio, target_wage, platform)?;
        Ok(self.assemble(&quote))
    }

    /// Like [`calculate_price`][Self::calculate_price] with the tier given by
    /// key name.  Names outside `{near, mid, far}` fail with `UnknownTier`.
    pub fn calculate_price_named(
        &self,
        tier:           &str,
        achieved_ratio: f64,
        target_wage:    f64,
        platform:       &str,
    ) -> PricingResult<TripRecord> {
        self.calculate_price(tier.parse()?, achieved_ratio, target_wage, platform)
    }
}
