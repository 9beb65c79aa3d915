use gw_core::CoreError;
use gw_pricing::PricingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        SimError::Pricing(PricingError::Core(e))
    }
}

pub type SimResult<T> = Result<T, SimError>;
