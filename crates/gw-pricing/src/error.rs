use gw_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    /// Unknown tier or malformed configuration.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{field} evaluated to a non-finite value ({value})")]
    NonFinite {
        field: &'static str,
        value: f64,
    },
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Pass `value` through unchanged if finite.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFinite { field, value })
    }
}
