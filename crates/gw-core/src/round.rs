//! Fixed-precision rounding for reported figures.
//!
//! Monetary values and hour counts are reported to 2 decimal places, distances
//! to 3.  Rounding is half away from zero (`f64::round`).

/// Decimal places for every monetary and hour figure.
pub const MONEY_DECIMALS: i32 = 2;

/// Decimal places for distance figures.
pub const DISTANCE_DECIMALS: i32 = 3;

/// Round `value` to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[inline]
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DECIMALS)
}

#[inline]
pub fn round_distance(value: f64) -> f64 {
    round_to(value, DISTANCE_DECIMALS)
}
