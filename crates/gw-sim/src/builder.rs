//! Fluent builder for constructing an [`OrderSimulator`].

use gw_core::{Clock, PricingConfig, SystemClock, WeightedChoice, rng::time_seed};
use gw_pricing::PriceCalculator;

use crate::{OrderSimulator, SimResult, SimulationParams};

/// Fluent builder for [`OrderSimulator<C>`].
///
/// # Required inputs
///
/// - [`PricingConfig`]: tier table, factors, targets, …
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                          |
/// |----------------|----------------------------------|
/// | `.params(p)`   | `SimulationParams::default()`    |
/// | `.seed(s)`     | derived from the wall clock      |
/// | `.clock(c)`    | [`SystemClock`]                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = OrderSimulatorBuilder::new(PricingConfig::default())
///     .seed(42)
///     .clock(FixedClock::at_local_hour(9).unwrap())
///     .build()?;
/// let run = sim.simulate_orders(40, 150, 714.0)?;
/// ```
pub struct OrderSimulatorBuilder<C: Clock = SystemClock> {
    config: PricingConfig,
    params: Option<SimulationParams>,
    seed:   Option<u64>,
    clock:  C,
}

impl OrderSimulatorBuilder<SystemClock> {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            params: None,
            seed:   None,
            clock:  SystemClock,
        }
    }
}

impl<C: Clock> OrderSimulatorBuilder<C> {
    /// Override the draw probabilities, bonuses and goal thresholds.
    pub fn params(mut self, params: SimulationParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Fix the RNG seed.  The same seed, config and clock always produce the
    /// same run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the clock used for peak-hour checks and timestamps.
    pub fn clock<D: Clock>(self, clock: D) -> OrderSimulatorBuilder<D> {
        OrderSimulatorBuilder {
            config: self.config,
            params: self.params,
            seed:   self.seed,
            clock,
        }
    }

    /// Validate inputs and return a ready-to-run [`OrderSimulator`].
    pub fn build(self) -> SimResult<OrderSimulator<C>> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        let calculator = PriceCalculator::new(self.config, self.clock)?;
        let tier_choice = WeightedChoice::new(params.tier_weights.entries())?;
        let seed = self.seed.unwrap_or_else(time_seed);

        Ok(OrderSimulator::from_parts(calculator, params, tier_choice, seed))
    }
}
