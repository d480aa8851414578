//! Daily meteo tables from CSV, one header row and one row per day.

use crate::input::error::InputError;
use log::info;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

fn read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|options| options.with_try_parse_dates(true))
}

/// Reads a meteo CSV file. Columns keep their header names.
pub fn read_meteo_csv(path: &Path) -> Result<DataFrame, InputError> {
    let frame = read_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| InputError::CsvReadPolars(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| InputError::CsvReadPolars(path.to_path_buf(), e))?;
    info!(
        "Read {} rows and {} columns from {}",
        frame.height(),
        frame.width(),
        path.display()
    );
    Ok(frame)
}

/// Reads meteo CSV content held in memory.
pub fn read_meteo_csv_str(content: &str) -> Result<DataFrame, InputError> {
    read_options()
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()
        .map_err(InputError::CsvParse)
}
