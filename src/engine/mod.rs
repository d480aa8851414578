//! The variable resolution engine.
//!
//! A [`MeteoEngine`] turns a partially populated daily table into a [`MeteoTable`]
//! by running every step of the fixed resolution order: each variable is taken as
//! is, derived with a warning, or reported as a terminating error.

pub mod dry_days;
pub mod error;
mod period;
mod steps;
pub(crate) mod working;

use crate::assembly::{assemble, MeteoTable};
use crate::error::MeteoError;
use crate::input::csv::read_meteo_csv;
use crate::physics::{MeteoPhysics, StandardPhysics};
use crate::types::parameters::Parameters;
use crate::types::period::Period;
use bon::bon;
use log::{debug, info};
use polars::prelude::DataFrame;
use std::path::Path;
use steps::{Resolver, RESOLUTION_ORDER};
use working::WorkingTable;

/// Time zone assumed for dates when none is declared.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Resolves daily meteo tables.
///
/// The engine holds the configuration shared by every resolution: the declared time
/// zone of the input dates, which gates the `TimezoneCF` correction of the solar
/// zenith angle, and the [`MeteoPhysics`] collaborators.
///
/// # Examples
///
/// ```
/// use meteo_forcing::{keys, MeteoEngine, Parameters};
/// use polars::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let raw = df!(
///     "Tmax" => [28.0, 27.5],
///     "Tmin" => [18.0, 17.0],
///     "RH" => [80.0, 75.0],
///     "RAD" => [20.0, 18.0],
///     "Rain" => [0.0, 4.2]
/// )?;
/// let parameters = Parameters::new()
///     .with(keys::START_DATE, "2001-01-01")
///     .with(keys::FPAR, 0.5)
///     .with(keys::ELEVATION, 1000.0)
///     .with(keys::LATITUDE, 9.9)
///     .with(keys::LONGITUDE, -83.6)
///     .with(keys::TIMEZONE_CF, 6.0)
///     .with(keys::WIND_SPEED, 1.5)
///     .with(keys::CO2, 400.0)
///     .with(keys::ALBEDO, 0.144);
///
/// let engine = MeteoEngine::default();
/// let meteo = engine.resolve(raw).parameters(&parameters).call()?;
/// assert_eq!(meteo.frame.width(), 20);
/// assert_eq!(meteo.unit("Pressure"), Some("hPa"));
/// # Ok(())
/// # }
/// ```
pub struct MeteoEngine {
    time_zone: String,
    physics: Box<dyn MeteoPhysics>,
}

#[bon]
impl MeteoEngine {
    /// Creates an engine.
    ///
    /// # Arguments
    ///
    /// * `time_zone` - Declared time zone of the input dates (default `"UTC"`). Only
    ///   UTC/GMT inputs receive the `TimezoneCF` correction.
    /// * `physics` - Collaborators used for derived variables (default [`StandardPhysics`]).
    #[builder]
    pub fn new(
        #[builder(into, default = String::from(DEFAULT_TIME_ZONE))] time_zone: String,
        physics: Option<Box<dyn MeteoPhysics>>,
    ) -> Self {
        Self {
            time_zone,
            physics: physics.unwrap_or_else(|| Box::new(StandardPhysics)),
        }
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Resolves a raw daily table into a complete [`MeteoTable`].
    ///
    /// Start the builder with the raw `frame`, then provide:
    /// *   `.parameters(&Parameters)`: site constants and metadata (required).
    /// *   `.period(Period)`: restrict the output to a date range (optional). A range wider
    ///     than the data is clipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`MeteoError::Resolution`] wrapping
    /// [`crate::ResolutionError::MissingVariable`] when a mandatory variable, or the
    /// prerequisite of its fallback, is missing.
    #[builder(start_fn = resolve)]
    #[doc(hidden)]
    pub fn build_resolve(
        &self,
        #[builder(start_fn)] frame: DataFrame,
        parameters: &Parameters,
        period: Option<Period>,
    ) -> Result<MeteoTable, MeteoError> {
        info!(
            "Resolving meteo table of {} rows and {} columns",
            frame.height(),
            frame.width()
        );
        let mut resolver = Resolver::new(
            WorkingTable::new(frame),
            parameters,
            self.physics.as_ref(),
            period,
            &self.time_zone,
        );
        for step in RESOLUTION_ORDER {
            debug!("Resolving {}", step.name);
            (step.run)(&mut resolver)?;
        }
        Ok(assemble(resolver.table, resolver.diagnostics)?)
    }

    /// Reads a daily meteo CSV file and resolves it, see [`MeteoEngine::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`MeteoError::Input`] if the file cannot be read or parsed, and the
    /// errors of [`MeteoEngine::resolve`] otherwise.
    #[builder(start_fn = resolve_file)]
    #[doc(hidden)]
    pub fn build_resolve_file(
        &self,
        #[builder(start_fn)] path: &Path,
        parameters: &Parameters,
        period: Option<Period>,
    ) -> Result<MeteoTable, MeteoError> {
        let frame = read_meteo_csv(path)?;
        self.resolve(frame)
            .parameters(parameters)
            .maybe_period(period)
            .call()
    }
}

impl Default for MeteoEngine {
    fn default() -> Self {
        Self::builder().build()
    }
}
