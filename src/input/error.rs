use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read meteo file '{0}'")]
    CsvReadPolars(PathBuf, #[source] PolarsError),

    #[error("Failed to parse in-memory meteo data")]
    CsvParse(#[source] PolarsError),

    #[error("Failed to read parameter file '{0}'")]
    ParameterRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse parameters")]
    ParameterParse(#[from] serde_json::Error),
}
