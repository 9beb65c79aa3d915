//! `gw-sim` — the order-simulation loop for the gigwage simulator.
//!
//! # Hourly loop
//!
//! ```text
//! for hour in 0..hours while trips < target_trips:
//!   ① Draw     — platform, tier, fat order, cross bonus (one SimRng stream)
//!   ② Price    — PriceCalculator::quote with the late-run achieved ratio
//!   ③ Bonuses  — fat-order surcharge, cross-district bonus
//!   ④ Rederive — hourly wage, real wage, tax from the adjusted price
//!   ⑤ Totals   — wage sums; trips += floor(orders_per_hour)
//! ```
//!
//! The summary is computed once after the loop and returned alongside the
//! trip records in a [`SimulationRun`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_core::PricingConfig;
//! use gw_sim::OrderSimulatorBuilder;
//!
//! let mut sim = OrderSimulatorBuilder::new(PricingConfig::default()).seed(7).build()?;
//! let run = sim.simulate_orders(40, 150, 714.0)?;
//! println!("{:?}", run.summary);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod params;
pub mod simulator;
pub mod summary;


pub use builder::OrderSimulatorBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use params::{SimulationParams, TierWeights};
pub use simulator::OrderSimulator;
pub use summary::{ReportEntry, SimulationRun, SimulationSummary};
