//! `gw-core` — foundational types for the `gigwage` delivery-wage simulator.
//!
//! This crate is a dependency of every other `gw-*` crate and has no `gw-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`tier`]    | `DistanceTier`, `TierPricing`, `TierTable`                |
//! | [`config`]  | `PricingConfig`, `TimeFactors`, `PeakWindows`, `BankDetails` |
//! | [`clock`]   | `Clock` capability, `SystemClock`, `FixedClock`           |
//! | [`rng`]     | `SimRng`, `WeightedChoice`                                |
//! | [`round`]   | 2- and 3-decimal rounding for reported figures            |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod round;
pub mod tier;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BankDetails, PeakWindows, PricingConfig, TimeFactors, TimePeriod};
pub use error::{CoreError, CoreResult};
pub use rng::{SimRng, WeightedChoice};
pub use round::{round_distance, round_money};
pub use tier::{DistanceTier, TierPricing, TierTable};
