//! Site constants and metadata supplied alongside a meteo table.

use crate::types::traits::any_date::AnyDate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys the resolution engine looks up.
pub mod keys {
    pub const START_DATE: &str = "Start_Date";
    pub const FPAR: &str = "FPAR";
    pub const ELEVATION: &str = "Elevation";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const TIMEZONE_CF: &str = "TimezoneCF";
    pub const WIND_SPEED: &str = "WindSpeed";
    pub const CO2: &str = "CO2";
    pub const MIN_TT: &str = "MinTT";
    pub const MAX_TT: &str = "MaxTT";
    pub const ALBEDO: &str = "albedo";
}

/// A single parameter value: numeric constants or text such as dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

/// Read-only key-value parameter set, deserializable from a flat JSON object.
///
/// # Examples
///
/// ```
/// use meteo_forcing::{keys, Parameters};
///
/// let parameters = Parameters::new()
///     .with(keys::FPAR, 0.5)
///     .with(keys::START_DATE, "1979-01-01");
/// assert_eq!(parameters.number(keys::FPAR), Some(0.5));
/// assert!(!parameters.contains(keys::CO2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: HashMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Numeric value of `key`. Text values are accepted when they parse as a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key)? {
            ParamValue::Number(value) => Some(*value),
            ParamValue::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Date value of `key`, parsed from text.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.values.get(key)? {
            ParamValue::Text(text) => Some(text.as_str().get_date_range()?.start),
            ParamValue::Number(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_accepts_numeric_text() {
        let parameters = Parameters::new()
            .with(keys::ELEVATION, "1100")
            .with(keys::LATITUDE, 9.93)
            .with(keys::START_DATE, "2000-01-01");
        assert_eq!(parameters.number(keys::ELEVATION), Some(1100.0));
        assert_eq!(parameters.number(keys::LATITUDE), Some(9.93));
        assert_eq!(parameters.number(keys::START_DATE), None);
        assert_eq!(parameters.number(keys::CO2), None);
    }

    #[test]
    fn test_date_parsing() {
        let parameters: Parameters = [(keys::START_DATE, "1979/01/01")].into_iter().collect();
        assert_eq!(
            parameters.date(keys::START_DATE),
            NaiveDate::from_ymd_opt(1979, 1, 1)
        );
        assert_eq!(Parameters::new().with("x", 3.0).date("x"), None);
    }

    #[test]
    fn test_deserialize_flat_object() -> Result<(), Box<dyn std::error::Error>> {
        let parameters: Parameters =
            serde_json::from_str(r#"{"FPAR": 0.5, "Start_Date": "1979-01-01", "CO2": 400}"#)?;
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters.number(keys::CO2), Some(400.0));
        assert_eq!(
            parameters.get(keys::START_DATE),
            Some(&ParamValue::Text("1979-01-01".to_string()))
        );
        Ok(())
    }
}
