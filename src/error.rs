use crate::engine::error::ResolutionError;
use crate::input::error::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl MeteoError {
    /// The variable a terminating escalation was raised for, if any.
    pub fn missing_variable(&self) -> Option<&str> {
        match self {
            MeteoError::Resolution(error) => error.missing_variable(),
            MeteoError::Input(_) => None,
        }
    }
}
