//! Field presence checks over tables and parameter sets.

use crate::types::parameters::Parameters;
use polars::prelude::DataFrame;

/// Where a named field is looked up.
#[derive(Debug, Clone, Copy)]
pub enum FieldSource<'a> {
    /// A table; fields are columns.
    Table(&'a DataFrame),
    /// A parameter set; fields are keys.
    Parameters(&'a Parameters),
}

/// `true` iff `name` is absent from `source`. Absence is a normal outcome, never an error.
///
/// # Examples
///
/// ```
/// use meteo_forcing::{is_missing, FieldSource, Parameters};
/// use polars::prelude::*;
///
/// let table = df!("A" => [1.0, 2.0]).unwrap();
/// assert!(!is_missing(FieldSource::Table(&table), "A"));
/// assert!(is_missing(FieldSource::Table(&table), "B"));
///
/// let parameters = Parameters::new().with("Stocking_Coffee", 5580.0);
/// assert!(!is_missing(FieldSource::Parameters(&parameters), "Stocking_Coffee"));
/// assert!(is_missing(FieldSource::Parameters(&parameters), "B"));
/// ```
pub fn is_missing(source: FieldSource<'_>, name: &str) -> bool {
    match source {
        FieldSource::Table(frame) => frame.get_column_index(name).is_none(),
        FieldSource::Parameters(parameters) => !parameters.contains(name),
    }
}

pub fn column_missing(frame: &DataFrame, name: &str) -> bool {
    is_missing(FieldSource::Table(frame), name)
}

pub fn parameter_missing(parameters: &Parameters, name: &str) -> bool {
    is_missing(FieldSource::Parameters(parameters), name)
}
