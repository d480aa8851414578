use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    // Terminating escalation; the message names the variable and any fallback hint.
    #[error("{message}")]
    MissingVariable { variable: String, message: String },

    #[error("Parameter '{key}' must be {expected}")]
    InvalidParameter { key: String, expected: &'static str },

    #[error("Could not resolve the given value to a date")]
    DateParsing,

    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Date column has no value in row {row}")]
    NullDate { row: usize },

    #[error("Date out of the representable range")]
    DateOutOfRange,

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}

impl ResolutionError {
    /// The variable a terminating escalation was raised for.
    pub fn missing_variable(&self) -> Option<&str> {
        match self {
            ResolutionError::MissingVariable { variable, .. } => Some(variable),
            _ => None,
        }
    }
}
