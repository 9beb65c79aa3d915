//! `gw-pricing` — the per-trip pricing formula.
//!
//! # Pipeline
//!
//! ```text
//! tier ─┐
//! ratio ├─► PriceCalculator::quote ─► TripQuote ─► (bonuses, rederive) ─► assemble ─► TripRecord
//! wage  │        ▲
//! platf ┘        └── Clock (peak hour, timestamp)
//! ```
//!
//! [`PriceCalculator::calculate_price`] runs `quote` + `assemble` in one call
//! for callers that do not layer bonuses.

pub mod calculator;
pub mod error;
pub mod record;


pub use calculator::{FOODPANDA, PriceCalculator, UBER};
pub use error::{PricingError, PricingResult};
pub use record::{TripQuote, TripRecord, WageBreakdown};
